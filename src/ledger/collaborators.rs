//! Interfaces to the user-facing side of the ledger.
//!
//! The ledger calls out through these traits for display, confirmation
//! and validation messages. All calls are synchronous.

use super::view::{PreviewView, ShiftListView};

/// Receives views to display.
pub trait RenderSink {
    /// Displays the shift list.
    fn render_list(&mut self, view: &ShiftListView);

    /// Displays the live preview of the uncommitted form.
    fn render_preview(&mut self, view: &PreviewView);
}

/// Asks the user a yes/no question.
pub trait ConfirmPrompt {
    /// Returns `true` if the user agreed.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Tells the user a shift could not be added.
pub trait ValidationNotifier {
    /// Shows `message` to the user.
    fn notify(&mut self, message: &str);
}

impl<F: FnMut(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// A render sink that keeps the most recent views.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// The last shift list rendered.
    pub list: Option<ShiftListView>,
    /// The last preview rendered.
    pub preview: Option<PreviewView>,
    /// How many times the list has been rendered.
    pub list_renders: usize,
}

impl RenderSink for RecordingSink {
    fn render_list(&mut self, view: &ShiftListView) {
        self.list = Some(view.clone());
        self.list_renders += 1;
    }

    fn render_preview(&mut self, view: &PreviewView) {
        self.preview = Some(view.clone());
    }
}

/// A notifier that keeps every message it is given.
#[derive(Debug, Clone, Default)]
pub struct CollectingNotifier {
    /// Messages in the order they were shown.
    pub messages: Vec<String>,
}

impl ValidationNotifier for CollectingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
