//! The shift ledger.
//!
//! [`ShiftLedger`] owns the list of committed shifts. Every mutation is
//! followed by a full snapshot write to the store and a refresh of the
//! render sink.

use std::cmp::Reverse;

use chrono::{Local, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{ShiftPay, calculate_shift_pay, format_money};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ShiftForm, ShiftRecord};

use super::collaborators::{ConfirmPrompt, RenderSink, ValidationNotifier};
use super::store::ShiftStore;
use super::view::{
    PreviewView, ShiftListView, build_preview, build_row, escape_html, title_or_default,
};

/// Message shown when a shift is added before its times are filled in.
pub const INCOMPLETE_SHIFT_MESSAGE: &str = "Please enter both a start and an end time.";

/// The list of committed shifts and its collaborators.
///
/// # Example
///
/// ```
/// use shift_ledger::config::LedgerConfig;
/// use shift_ledger::ledger::{CollectingNotifier, MemoryStore, RecordingSink, ShiftLedger};
/// use shift_ledger::models::ShiftForm;
/// use rust_decimal::Decimal;
///
/// let config = LedgerConfig::default();
/// let mut ledger = ShiftLedger::load(MemoryStore::new(), RecordingSink::default(), config);
///
/// let form = ShiftForm::from_defaults(&ledger.config().form_defaults);
/// let mut notifier = CollectingNotifier::default();
/// let record = ledger
///     .add_shift(&form, "Cafe", "2024-06-10", "$", &mut notifier)
///     .unwrap();
///
/// assert_eq!(record.pay, Decimal::new(180, 0));
/// assert_eq!(ledger.sink().list.as_ref().unwrap().grand_total, "$180.00");
/// ```
#[derive(Debug)]
pub struct ShiftLedger<S: ShiftStore, R: RenderSink> {
    store: S,
    sink: R,
    config: LedgerConfig,
    shifts: Vec<ShiftRecord>,
    selected_currency: String,
}

impl<S: ShiftStore, R: RenderSink> ShiftLedger<S, R> {
    /// Creates a ledger from the snapshot in `store` and renders it.
    ///
    /// A missing, unreadable, or corrupt snapshot yields an empty ledger.
    pub fn load(store: S, sink: R, config: LedgerConfig) -> Self {
        let selected_currency = config.default_currency.clone();
        let mut ledger = Self {
            store,
            sink,
            config,
            shifts: Vec::new(),
            selected_currency,
        };
        ledger.reload();
        ledger
    }

    /// Replaces the in-memory list with the stored snapshot and renders it.
    pub fn reload(&mut self) {
        self.shifts = self.read_snapshot();
        info!(shift_count = self.shifts.len(), "Loaded shift ledger");
        self.render();
    }

    fn read_snapshot(&self) -> Vec<ShiftRecord> {
        let key = &self.config.storage_key;
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "Shift snapshot unreadable, starting empty");
                return Vec::new();
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(err) => {
                warn!(key = %key, error = %err, "Shift snapshot corrupt, starting empty");
                return Vec::new();
            }
        };

        values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<ShiftRecord>(value) {
                Ok(mut record) => {
                    record.title = title_or_default(&record.title, &self.config.untitled_title);
                    Some(record)
                }
                Err(err) => {
                    warn!(index, error = %err, "Dropping unreadable shift record");
                    None
                }
            })
            .collect()
    }

    /// Writes the whole list to the store.
    fn write_snapshot(&mut self) -> LedgerResult<()> {
        let snapshot =
            serde_json::to_string(&self.shifts).map_err(|e| LedgerError::SnapshotEncode {
                message: e.to_string(),
            })?;
        self.store.set(&self.config.storage_key, snapshot)
    }

    /// Persists the list, logging rather than propagating a failed write.
    fn persist(&mut self) {
        if let Err(err) = self.write_snapshot() {
            warn!(error = %err, "Failed to persist shift snapshot");
        }
    }

    /// Calculates the form and commits it as a new shift.
    ///
    /// A blank `title` becomes the untitled default and a blank `date`
    /// becomes today's date. `currency` is stored on the record.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteShift` after notifying the user when either time is
    /// missing or malformed; the ledger is left untouched.
    pub fn add_shift(
        &mut self,
        form: &ShiftForm,
        title: &str,
        date: &str,
        currency: &str,
        notifier: &mut impl ValidationNotifier,
    ) -> LedgerResult<ShiftRecord> {
        let Some(input) = form.to_input() else {
            debug!(
                start_time = %form.start_time,
                end_time = %form.end_time,
                "Rejected incomplete shift"
            );
            notifier.notify(INCOMPLETE_SHIFT_MESSAGE);
            return Err(LedgerError::IncompleteShift {
                message: INCOMPLETE_SHIFT_MESSAGE.to_string(),
            });
        };
        let result = calculate_shift_pay(&input);

        let date = date.trim();
        let record = ShiftRecord {
            id: self.next_id(),
            title: title_or_default(title, &self.config.untitled_title),
            date: if date.is_empty() {
                Local::now().date_naive().format("%Y-%m-%d").to_string()
            } else {
                date.to_string()
            },
            start_time: form.start_time.clone(),
            end_time: form.end_time.clone(),
            hours: result.hours,
            rate: result.rate,
            pay: result.pay,
            break_mins: input.break_minutes,
            currency: currency.to_string(),
            overnight: input.overnight,
        };

        info!(
            shift_id = %record.id,
            hours = %record.hours,
            pay = %record.pay,
            "Shift added"
        );
        self.shifts.push(record.clone());
        self.persist();
        self.render();
        self.live_preview(form, title, currency);

        Ok(record)
    }

    /// Generates an id from the current time and a random suffix.
    fn next_id(&self) -> String {
        loop {
            let id = format!(
                "{}-{}",
                Utc::now().timestamp_millis(),
                Uuid::new_v4().simple()
            );
            if !self.shifts.iter().any(|shift| shift.id == id) {
                return id;
            }
        }
    }

    /// Removes the shift with `id`, returning whether one was removed.
    ///
    /// The list is persisted and rendered either way.
    pub fn delete_shift(&mut self, id: &str) -> bool {
        let before = self.shifts.len();
        self.shifts.retain(|shift| shift.id != id);
        let removed = self.shifts.len() != before;

        if removed {
            info!(shift_id = %id, "Shift deleted");
        } else {
            debug!(shift_id = %id, "No shift to delete");
        }
        self.persist();
        self.render();
        removed
    }

    /// Removes every shift once the user confirms.
    ///
    /// An empty ledger returns `false` straight away without prompting.
    pub fn clear_all(&mut self, prompt: &mut impl ConfirmPrompt) -> bool {
        if self.shifts.is_empty() {
            return false;
        }

        let message = format!("Delete all {} saved shifts?", self.shifts.len());
        if !prompt.confirm(&message) {
            debug!("Clear all cancelled");
            return false;
        }

        info!(shift_count = self.shifts.len(), "Cleared all shifts");
        self.shifts.clear();
        self.persist();
        self.render();
        true
    }

    /// Sum of pay over every shift.
    pub fn grand_total(&self) -> Decimal {
        self.shifts
            .iter()
            .fold(Decimal::ZERO, |total, shift| total.saturating_add(shift.pay))
    }

    /// Calculates the uncommitted form and renders the preview.
    ///
    /// The ledger itself is not changed.
    pub fn live_preview(&mut self, form: &ShiftForm, title: &str, currency: &str) -> PreviewView {
        let result: Option<ShiftPay> = form.to_input().map(|input| calculate_shift_pay(&input));
        let view = build_preview(result.as_ref(), title, currency, &self.config);
        self.sink.render_preview(&view);
        view
    }

    /// Returns a form holding the configured reset values and previews it.
    pub fn reset_form(&mut self, title: &str, currency: &str) -> ShiftForm {
        let form = ShiftForm::from_defaults(&self.config.form_defaults);
        self.live_preview(&form, title, currency);
        form
    }

    /// Builds the shift list view without rendering it.
    ///
    /// Rows are ordered by date, most recent first; shifts on the same date
    /// (or without a readable date) keep the order they were added in.
    pub fn list_view(&self) -> ShiftListView {
        let mut ordered: Vec<&ShiftRecord> = self.shifts.iter().collect();
        ordered.sort_by_key(|shift| Reverse(shift.parsed_date()));

        ShiftListView {
            rows: ordered
                .into_iter()
                .map(|shift| build_row(shift, &self.config))
                .collect(),
            grand_total: format_money(
                &escape_html(&self.selected_currency),
                self.grand_total(),
            ),
            count: self.shifts.len(),
        }
    }

    /// Builds the shift list view and hands it to the render sink.
    pub fn render(&mut self) -> ShiftListView {
        let view = self.list_view();
        self.sink.render_list(&view);
        view
    }

    /// Changes the selected currency label and re-renders.
    ///
    /// Stored shifts keep the currency they were added with; only the grand
    /// total follows the selection.
    pub fn set_currency(&mut self, currency: &str) {
        self.selected_currency = currency.to_string();
        self.render();
    }

    /// The currently selected currency label.
    pub fn selected_currency(&self) -> &str {
        &self.selected_currency
    }

    /// The shifts in the order they were added.
    pub fn shifts(&self) -> &[ShiftRecord] {
        &self.shifts
    }

    /// Number of shifts.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Whether the ledger holds no shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// The ledger configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// The persistence store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The render sink.
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Consumes the ledger, returning its store and sink.
    pub fn into_parts(self) -> (S, R) {
        (self.store, self.sink)
    }
}
