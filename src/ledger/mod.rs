//! Shift ledger state management.
//!
//! This module contains the [`ShiftLedger`], the persistence store it
//! writes snapshots to, the views it renders, and the traits through which
//! it talks to the user.

mod collaborators;
mod shift_ledger;
mod store;
mod view;

pub use collaborators::{
    CollectingNotifier, ConfirmPrompt, RecordingSink, RenderSink, ValidationNotifier,
};
pub use shift_ledger::{INCOMPLETE_SHIFT_MESSAGE, ShiftLedger};
pub use store::{FileStore, MemoryStore, ShiftStore};
pub use view::{EMPTY_RATE_NOTE, PreviewView, ShiftListView, ShiftRow, escape_html};
