//! Error types for controller operations.

use crate::models::{DialogVisibility, ItemId};
use thiserror::Error;

/// Why a draft could not be committed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must not be blank")]
    BlankName,

    #[error("Quantity must not be blank")]
    BlankQuantity,

    #[error("Quantity is not a whole number: {0:?}")]
    InvalidQuantity(String),
}

/// Controller error type.
///
/// None of these are fatal: the controller stays interactable after each.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Draft failed validation, nothing was committed.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// No item with this id exists.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Confirm was issued while a different dialog was open.
    #[error("Expected {expected:?} dialog, but {actual:?} is open")]
    WrongDialog {
        expected: DialogVisibility,
        actual: DialogVisibility,
    },

    /// Confirm was issued with no dialog open.
    #[error("No dialog is open")]
    NoDialogOpen,

    /// Two seeded items share an id.
    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),

    /// Every id has been handed out.
    #[error("No item ids left to allocate")]
    IdsExhausted,
}

pub type Result<T> = std::result::Result<T, ControllerError>;
