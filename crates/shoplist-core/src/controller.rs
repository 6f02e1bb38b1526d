//! Shopping list controller.
//!
//! Owns the item list plus the create/edit dialog flows. Every operation is a
//! run-to-completion transition that returns the resulting state for the
//! frontend to render.

use crate::error::{ControllerError, Result, ValidationError};
use crate::models::{DialogVisibility, DraftState, ItemId, ShoppingItem, ShoppingListState};
use std::collections::HashSet;

/// User actions forwarded by a frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Open the dialog to add a new item.
    OpenCreate,
    /// Open the dialog to edit an existing item.
    OpenEdit(ItemId),
    /// Name field changed.
    SetName(String),
    /// Quantity field changed.
    SetQuantity(String),
    /// Commit the open dialog.
    Confirm,
    /// Close the open dialog without committing.
    Cancel,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub name: String,
    pub quantity: i32,
}

/// Check that a draft can be committed.
pub fn validate_draft(draft: &DraftState) -> std::result::Result<ValidDraft, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::BlankName);
    }

    let quantity = draft.quantity.trim();
    if quantity.is_empty() {
        return Err(ValidationError::BlankQuantity);
    }

    let quantity = quantity
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidQuantity(draft.quantity.clone()))?;

    Ok(ValidDraft {
        name: name.to_string(),
        quantity,
    })
}

/// Authoritative in-memory shopping list with its dialog state.
#[derive(Debug, Default)]
pub struct ShoppingListController {
    state: ShoppingListState,
    /// Highest id ever handed out, so ids are never reused.
    last_id: u32,
}

impl ShoppingListController {
    /// Create an empty controller with no dialog open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a controller with existing items.
    ///
    /// Names are trimmed. New items are allocated ids above the highest
    /// seeded id.
    pub fn from_items(items: Vec<ShoppingItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut seeded = Vec::with_capacity(items.len());

        for item in items {
            if !seen.insert(item.id) {
                return Err(ControllerError::DuplicateId(item.id));
            }
            if item.name.trim().is_empty() {
                return Err(ValidationError::BlankName.into());
            }
            seeded.push(ShoppingItem::new(item.id, &item.name, item.quantity));
        }

        let last_id = seeded.iter().map(|item| item.id.0).max().unwrap_or(0);
        tracing::debug!("Seeded controller with {} items", seeded.len());

        Ok(Self {
            state: ShoppingListState {
                items: seeded,
                ..ShoppingListState::default()
            },
            last_id,
        })
    }

    /// Current state.
    pub fn state(&self) -> &ShoppingListState {
        &self.state
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[ShoppingItem] {
        &self.state.items
    }

    /// Which dialog is shown.
    pub fn dialog(&self) -> DialogVisibility {
        self.state.dialog
    }

    /// Current draft.
    pub fn draft(&self) -> &DraftState {
        &self.state.draft
    }

    /// Find an item by id.
    pub fn find_item(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.state.find_item(id)
    }

    /// Apply a user intent.
    pub fn dispatch(&mut self, intent: Intent) -> Result<&ShoppingListState> {
        match intent {
            Intent::OpenCreate => Ok(self.open_create_dialog()),
            Intent::OpenEdit(id) => self.open_edit_dialog(id),
            Intent::SetName(text) => Ok(self.set_draft_name(text)),
            Intent::SetQuantity(text) => Ok(self.set_draft_quantity(text)),
            Intent::Confirm => match self.state.dialog {
                DialogVisibility::Create => self.confirm_create(),
                DialogVisibility::Edit => self.confirm_edit(),
                DialogVisibility::None => Err(ControllerError::NoDialogOpen),
            },
            Intent::Cancel => Ok(self.cancel_dialog()),
        }
    }

    /// Show the create dialog with a fresh draft.
    pub fn open_create_dialog(&mut self) -> &ShoppingListState {
        self.state.dialog = DialogVisibility::Create;
        self.state.draft = DraftState::default();
        tracing::debug!("Opened create dialog");
        &self.state
    }

    /// Show the edit dialog pre-filled from the item with `id`.
    pub fn open_edit_dialog(&mut self, id: ItemId) -> Result<&ShoppingListState> {
        let Some(draft) = self.state.find_item(id).map(DraftState::from_item) else {
            tracing::warn!("Cannot edit item {}: not found", id);
            return Err(ControllerError::ItemNotFound(id));
        };

        self.state.draft = draft;
        self.state.dialog = DialogVisibility::Edit;
        tracing::debug!("Opened edit dialog for item {}", id);
        Ok(&self.state)
    }

    /// Replace the draft name.
    pub fn set_draft_name(&mut self, text: impl Into<String>) -> &ShoppingListState {
        self.state.draft.name = text.into();
        &self.state
    }

    /// Replace the draft quantity text.
    pub fn set_draft_quantity(&mut self, text: impl Into<String>) -> &ShoppingListState {
        self.state.draft.quantity = text.into();
        &self.state
    }

    /// Commit the create dialog as a new item.
    ///
    /// On invalid input nothing changes and the dialog stays open.
    pub fn confirm_create(&mut self) -> Result<&ShoppingListState> {
        self.expect_dialog(DialogVisibility::Create)?;

        let valid = validate_draft(&self.state.draft).inspect_err(|e| {
            tracing::debug!("Rejected create: {}", e);
        })?;
        let id = self.allocate_id()?;

        self.state
            .items
            .push(ShoppingItem::new(id, &valid.name, valid.quantity));
        self.close_dialog();
        tracing::debug!("Added item {} ({} x{})", id, valid.name, valid.quantity);
        Ok(&self.state)
    }

    /// Commit the edit dialog onto the item being edited.
    ///
    /// The item keeps its id and position. If the item no longer exists the
    /// dialog is closed without changes.
    pub fn confirm_edit(&mut self) -> Result<&ShoppingListState> {
        self.expect_dialog(DialogVisibility::Edit)?;

        let valid = validate_draft(&self.state.draft).inspect_err(|e| {
            tracing::debug!("Rejected edit: {}", e);
        })?;

        // A draft without a target describes a create.
        let Some(id) = self.state.draft.editing_item_id else {
            return Err(ControllerError::WrongDialog {
                expected: DialogVisibility::Edit,
                actual: DialogVisibility::Create,
            });
        };

        let Some(index) = self.state.items.iter().position(|item| item.id == id) else {
            self.close_dialog();
            tracing::warn!("Edited item {} no longer exists", id);
            return Err(ControllerError::ItemNotFound(id));
        };

        let item = &mut self.state.items[index];
        item.name = valid.name;
        item.quantity = valid.quantity;
        tracing::debug!("Updated item {} ({} x{})", item.id, item.name, item.quantity);

        self.close_dialog();
        Ok(&self.state)
    }

    /// Close any dialog and discard the draft.
    pub fn cancel_dialog(&mut self) -> &ShoppingListState {
        if self.state.is_dialog_open() {
            tracing::debug!("Cancelled {:?} dialog", self.state.dialog);
        }
        self.close_dialog();
        &self.state
    }

    fn close_dialog(&mut self) {
        self.state.dialog = DialogVisibility::None;
        self.state.draft = DraftState::default();
    }

    fn expect_dialog(&self, expected: DialogVisibility) -> Result<()> {
        if self.state.dialog == expected {
            Ok(())
        } else if self.state.dialog == DialogVisibility::None {
            Err(ControllerError::NoDialogOpen)
        } else {
            Err(ControllerError::WrongDialog {
                expected,
                actual: self.state.dialog,
            })
        }
    }

    fn allocate_id(&mut self) -> Result<ItemId> {
        let max_present = self.state.items.iter().map(|item| item.id.0).max().unwrap_or(0);
        let next = self
            .last_id
            .max(max_present)
            .checked_add(1)
            .ok_or(ControllerError::IdsExhausted)?;
        self.last_id = next;
        Ok(ItemId(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(controller: &mut ShoppingListController, name: &str, quantity: &str) -> ItemId {
        controller.open_create_dialog();
        controller.set_draft_name(name);
        controller.set_draft_quantity(quantity);
        let state = controller.confirm_create().expect("create should succeed");
        state.items.last().expect("item appended").id
    }

    #[test]
    fn starts_empty_with_no_dialog() {
        let controller = ShoppingListController::new();
        assert!(controller.items().is_empty());
        assert_eq!(controller.dialog(), DialogVisibility::None);
        assert_eq!(controller.draft(), &DraftState::default());
    }

    #[test]
    fn open_create_resets_draft() {
        let mut controller = ShoppingListController::new();
        controller.open_create_dialog();
        controller.set_draft_name("Cheese");
        controller.set_draft_quantity("4");

        let state = controller.open_create_dialog();
        assert_eq!(state.dialog, DialogVisibility::Create);
        assert_eq!(state.draft, DraftState::default());
    }

    #[test]
    fn valid_create_appends_one_item() {
        let mut controller = ShoppingListController::new();
        controller.open_create_dialog();
        controller.set_draft_name("  Apples ");
        controller.set_draft_quantity("6");

        let state = controller.confirm_create().unwrap();
        assert_eq!(state.items, vec![ShoppingItem::new(ItemId(1), "Apples", 6)]);
        assert_eq!(state.dialog, DialogVisibility::None);
        assert_eq!(state.draft.name, "");
        assert_eq!(state.draft.quantity, "1");
    }

    #[test]
    fn blank_name_is_rejected_and_dialog_stays_open() {
        let mut controller = ShoppingListController::new();
        controller.open_create_dialog();
        controller.set_draft_name("   ");

        let err = controller.confirm_create().unwrap_err();
        assert_eq!(err, ControllerError::InvalidInput(ValidationError::BlankName));
        assert!(controller.items().is_empty());
        assert_eq!(controller.dialog(), DialogVisibility::Create);
        assert_eq!(controller.draft().name, "   ");
    }

    #[test]
    fn non_numeric_quantity_is_rejected() {
        let mut controller = ShoppingListController::new();
        controller.open_create_dialog();
        controller.set_draft_name("Milk");
        controller.set_draft_quantity("abc");

        let err = controller.confirm_create().unwrap_err();
        assert_eq!(
            err,
            ControllerError::InvalidInput(ValidationError::InvalidQuantity("abc".into()))
        );
        assert!(controller.items().is_empty());
        assert_eq!(controller.dialog(), DialogVisibility::Create);
    }

    #[test]
    fn blank_quantity_is_rejected() {
        let mut controller = ShoppingListController::new();
        controller.open_create_dialog();
        controller.set_draft_name("Milk");
        controller.set_draft_quantity("");

        let err = controller.confirm_create().unwrap_err();
        assert_eq!(err, ControllerError::InvalidInput(ValidationError::BlankQuantity));
        assert_eq!(controller.dialog(), DialogVisibility::Create);
    }

    #[test]
    fn confirm_create_requires_create_dialog() {
        let mut controller = ShoppingListController::new();
        controller.set_draft_name("Milk");

        let err = controller.confirm_create().unwrap_err();
        assert_eq!(err, ControllerError::NoDialogOpen);
        assert!(controller.items().is_empty());
    }

    #[test]
    fn confirm_create_from_edit_dialog_is_rejected() {
        let mut controller = ShoppingListController::new();
        let id = create(&mut controller, "Milk", "1");
        controller.open_edit_dialog(id).unwrap();

        let err = controller.confirm_create().unwrap_err();
        assert_eq!(
            err,
            ControllerError::WrongDialog {
                expected: DialogVisibility::Create,
                actual: DialogVisibility::Edit,
            }
        );
        assert_eq!(controller.items().len(), 1);
        assert_eq!(controller.dialog(), DialogVisibility::Edit);
    }

    #[test]
    fn open_edit_prefills_draft() {
        let mut controller = ShoppingListController::new();
        let id = create(&mut controller, "Butter", "2");

        let state = controller.open_edit_dialog(id).unwrap();
        assert_eq!(state.dialog, DialogVisibility::Edit);
        assert_eq!(state.draft.name, "Butter");
        assert_eq!(state.draft.quantity, "2");
        assert_eq!(state.draft.editing_item_id, Some(id));
    }

    #[test]
    fn open_edit_unknown_id_is_a_no_op() {
        let mut controller = ShoppingListController::new();
        create(&mut controller, "Butter", "2");
        let before = controller.state().clone();

        let err = controller.open_edit_dialog(ItemId(42)).unwrap_err();
        assert_eq!(err, ControllerError::ItemNotFound(ItemId(42)));
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn edit_without_changes_leaves_item_untouched() {
        let mut controller = ShoppingListController::new();
        let id = create(&mut controller, "Rice", "3");
        let before = controller.items().to_vec();

        controller.open_edit_dialog(id).unwrap();
        controller.confirm_edit().unwrap();
        assert_eq!(controller.items(), before.as_slice());
    }

    #[test]
    fn edit_keeps_id_and_position() {
        let mut controller = ShoppingListController::new();
        create(&mut controller, "A", "1");
        let middle = create(&mut controller, "B", "1");
        create(&mut controller, "C", "1");

        controller.open_edit_dialog(middle).unwrap();
        controller.set_draft_name("Beans");
        controller.set_draft_quantity("5");
        let state = controller.confirm_edit().unwrap();

        assert_eq!(state.items[1], ShoppingItem::new(middle, "Beans", 5));
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.dialog, DialogVisibility::None);
        assert_eq!(state.draft, DraftState::default());
    }

    #[test]
    fn invalid_edit_keeps_dialog_open() {
        let mut controller = ShoppingListController::new();
        let id = create(&mut controller, "Flour", "1");

        controller.open_edit_dialog(id).unwrap();
        controller.set_draft_quantity("one");
        assert!(controller.confirm_edit().is_err());
        assert_eq!(controller.dialog(), DialogVisibility::Edit);
        assert_eq!(controller.find_item(id).unwrap().quantity, 1);
    }

    #[test]
    fn edit_of_vanished_item_closes_dialog() {
        let mut controller = ShoppingListController::new();
        let kept = create(&mut controller, "Honey", "1");
        let gone = create(&mut controller, "Yeast", "2");

        controller.open_edit_dialog(gone).unwrap();
        controller.set_draft_name("Dry yeast");
        controller.state.items.retain(|item| item.id != gone);
        let before = controller.items().to_vec();

        let err = controller.confirm_edit().unwrap_err();
        assert_eq!(err, ControllerError::ItemNotFound(gone));
        assert_eq!(controller.dialog(), DialogVisibility::None);
        assert_eq!(controller.draft(), &DraftState::default());
        assert_eq!(controller.items(), before.as_slice());
        assert_eq!(controller.items()[0].id, kept);
    }

    #[test]
    fn cancel_never_touches_items() {
        let mut controller = ShoppingListController::new();
        let id = create(&mut controller, "Oats", "1");
        let before = controller.items().to_vec();

        controller.open_create_dialog();
        controller.set_draft_name("Sugar");
        controller.cancel_dialog();
        assert_eq!(controller.items(), before.as_slice());

        controller.open_edit_dialog(id).unwrap();
        controller.set_draft_name("Barley");
        let state = controller.cancel_dialog();
        assert_eq!(state.items, before);
        assert_eq!(state.dialog, DialogVisibility::None);
        assert_eq!(state.draft, DraftState::default());
    }

    #[test]
    fn ids_are_not_reused_after_a_gap() {
        let mut controller = ShoppingListController::from_items(vec![
            ShoppingItem::new(ItemId(1), "A", 1),
            ShoppingItem::new(ItemId(3), "C", 1),
        ])
        .unwrap();

        let first = create(&mut controller, "D", "1");
        let second = create(&mut controller, "E", "1");
        assert_eq!(first, ItemId(4));
        assert_eq!(second, ItemId(5));
    }

    #[test]
    fn from_items_rejects_duplicate_ids() {
        let err = ShoppingListController::from_items(vec![
            ShoppingItem::new(ItemId(2), "A", 1),
            ShoppingItem::new(ItemId(2), "B", 1),
        ])
        .unwrap_err();
        assert_eq!(err, ControllerError::DuplicateId(ItemId(2)));
    }

    #[test]
    fn id_allocation_fails_cleanly_when_exhausted() {
        let mut controller =
            ShoppingListController::from_items(vec![ShoppingItem::new(ItemId(u32::MAX), "Max", 1)])
                .unwrap();
        controller.open_create_dialog();
        controller.set_draft_name("Overflow");

        assert_eq!(controller.confirm_create().unwrap_err(), ControllerError::IdsExhausted);
        assert_eq!(controller.items().len(), 1);
        assert_eq!(controller.dialog(), DialogVisibility::Create);
    }

    #[test]
    fn dispatch_routes_confirm_by_dialog() {
        let mut controller = ShoppingListController::new();
        assert_eq!(
            controller.dispatch(Intent::Confirm).unwrap_err(),
            ControllerError::NoDialogOpen
        );

        controller.dispatch(Intent::OpenCreate).unwrap();
        controller.dispatch(Intent::SetName("Jam".into())).unwrap();
        controller.dispatch(Intent::SetQuantity("2".into())).unwrap();
        controller.dispatch(Intent::Confirm).unwrap();

        controller.dispatch(Intent::OpenEdit(ItemId(1))).unwrap();
        controller.dispatch(Intent::SetQuantity("9".into())).unwrap();
        let state = controller.dispatch(Intent::Confirm).unwrap();
        assert_eq!(state.items, vec![ShoppingItem::new(ItemId(1), "Jam", 9)]);
    }

    #[test]
    fn validate_tolerates_padded_quantity() {
        let draft = DraftState {
            name: "Salt".into(),
            quantity: " 3 ".into(),
            editing_item_id: None,
        };
        assert_eq!(
            validate_draft(&draft).unwrap(),
            ValidDraft {
                name: "Salt".into(),
                quantity: 3
            }
        );
    }
}
