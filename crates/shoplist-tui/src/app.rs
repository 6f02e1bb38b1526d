//! Application state management.

use crate::config::Config;
use shoplist_core::{
    ControllerError, DialogVisibility, Intent, ShoppingItem, ShoppingListController,
};

/// Application state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// Screen is interactable.
    Running,
    /// Application should quit.
    Quit,
}

/// Input field focused inside a dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogField {
    Name,
    Quantity,
}

impl DialogField {
    /// The other field.
    pub fn toggle(self) -> Self {
        match self {
            DialogField::Name => DialogField::Quantity,
            DialogField::Quantity => DialogField::Name,
        }
    }
}

/// Main application model.
pub struct App {
    /// Current application state.
    pub state: AppState,
    /// Owner of the list and dialog flows.
    pub controller: ShoppingListController,
    /// Loaded configuration.
    pub config: Config,
    /// Index of the highlighted row.
    pub selected_index: usize,
    /// Focused field while a dialog is open.
    pub field: DialogField,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: Config) -> Self {
        Self::with_controller(config, ShoppingListController::new())
    }

    /// Create an application around an existing controller.
    pub fn with_controller(config: Config, controller: ShoppingListController) -> Self {
        Self {
            state: AppState::Running,
            controller,
            config,
            selected_index: 0,
            field: DialogField::Name,
        }
    }

    /// Whether a dialog currently captures input.
    pub fn in_dialog(&self) -> bool {
        self.controller.dialog() != DialogVisibility::None
    }

    /// Item under the cursor.
    pub fn selected_item(&self) -> Option<&ShoppingItem> {
        self.controller.items().get(self.selected_index)
    }

    /// Move selection up in the list.
    pub fn move_up(&mut self) {
        let len = self.controller.items().len();
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else if self.config.selection_wraps && len > 0 {
            self.selected_index = len - 1;
        }
    }

    /// Move selection down in the list.
    pub fn move_down(&mut self) {
        let len = self.controller.items().len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        } else if self.config.selection_wraps {
            self.selected_index = 0;
        }
    }

    /// Jump to the first row.
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last row.
    pub fn select_last(&mut self) {
        self.selected_index = self.controller.items().len().saturating_sub(1);
    }

    /// Open the add dialog.
    pub fn open_create(&mut self) {
        self.apply(Intent::OpenCreate);
        self.field = DialogField::Name;
    }

    /// Open the edit dialog for the highlighted item.
    pub fn edit_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };
        self.apply(Intent::OpenEdit(id));
        self.field = DialogField::Name;
    }

    /// Switch focus to the other dialog field.
    pub fn toggle_field(&mut self) {
        self.field = self.field.toggle();
    }

    /// Append a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        let mut text = self.focused_text().to_string();
        text.push(c);
        self.set_focused_text(text);
    }

    /// Remove the last character of the focused field.
    pub fn pop_char(&mut self) {
        let mut text = self.focused_text().to_string();
        if text.pop().is_some() {
            self.set_focused_text(text);
        }
    }

    /// Confirm the open dialog.
    pub fn confirm(&mut self) {
        let creating = self.controller.dialog() == DialogVisibility::Create;
        if self.apply(Intent::Confirm) && creating {
            self.select_last();
        }
    }

    /// Close the open dialog without saving.
    pub fn cancel(&mut self) {
        self.apply(Intent::Cancel);
    }

    fn focused_text(&self) -> &str {
        let draft = self.controller.draft();
        match self.field {
            DialogField::Name => &draft.name,
            DialogField::Quantity => &draft.quantity,
        }
    }

    fn set_focused_text(&mut self, text: String) {
        let intent = match self.field {
            DialogField::Name => Intent::SetName(text),
            DialogField::Quantity => Intent::SetQuantity(text),
        };
        self.apply(intent);
    }

    /// Forward an intent to the controller. Returns true if it was applied.
    fn apply(&mut self, intent: Intent) -> bool {
        match self.controller.dispatch(intent) {
            Ok(_) => true,
            // Rejected drafts leave the dialog open without a message.
            Err(ControllerError::InvalidInput(e)) => {
                tracing::debug!("Input rejected: {}", e);
                false
            }
            Err(e) => {
                tracing::warn!("Intent failed: {}", e);
                false
            }
        }
    }
}
