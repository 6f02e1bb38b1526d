//! Core models and dialog state handling for shoplist.
//!
//! This crate holds the authoritative item list and the create/edit dialog
//! flows. Frontends forward user intents and render the returned state.

pub mod controller;
pub mod error;
pub mod models;

pub use controller::{Intent, ShoppingListController};
pub use error::{ControllerError, Result, ValidationError};
pub use models::{DialogVisibility, DraftState, ItemId, ShoppingItem, ShoppingListState};
