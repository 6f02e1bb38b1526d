//! Shared data types for the application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a shopping item, unique within one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Represents one entry in the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i32,
}

impl ShoppingItem {
    /// Create an item, trimming surrounding whitespace from the name.
    pub fn new(id: ItemId, name: &str, quantity: i32) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            quantity,
        }
    }
}

/// Which modal is currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DialogVisibility {
    /// No dialog, the list is interactable.
    #[default]
    None,
    /// The "add item" dialog.
    Create,
    /// The "edit item" dialog.
    Edit,
}

/// Quantity text a fresh draft starts with.
pub const DEFAULT_DRAFT_QUANTITY: &str = "1";

/// Unconfirmed input of the open dialog.
///
/// The quantity is kept as raw text so partial input such as an empty field
/// can be held while the user is typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftState {
    pub name: String,
    pub quantity: String,
    /// Item a confirmed edit applies to. `None` while creating.
    pub editing_item_id: Option<ItemId>,
}

impl Default for DraftState {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: DEFAULT_DRAFT_QUANTITY.to_string(),
            editing_item_id: None,
        }
    }
}

impl DraftState {
    /// Draft pre-filled from an existing item.
    pub fn from_item(item: &ShoppingItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            editing_item_id: Some(item.id),
        }
    }
}

/// Everything a renderer needs to draw the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListState {
    /// Items in insertion order.
    pub items: Vec<ShoppingItem>,
    pub dialog: DialogVisibility,
    pub draft: DraftState,
}

impl ShoppingListState {
    /// Find an item by id.
    pub fn find_item(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether any dialog is open.
    pub fn is_dialog_open(&self) -> bool {
        self.dialog != DialogVisibility::None
    }
}
