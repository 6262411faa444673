//! Display-ready views of the ledger.
//!
//! The ledger does not draw anything itself. It builds these views, with
//! every value already formatted and every piece of user text escaped, and
//! hands them to a [`RenderSink`](super::RenderSink).

use std::fmt::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::{ShiftPay, format_fixed, format_money};
use crate::config::LedgerConfig;
use crate::models::ShiftRecord;

/// Placeholder rate note shown while a shift cannot be calculated.
pub const EMPTY_RATE_NOTE: &str = "—";

/// One formatted row of the shift list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRow {
    /// The record id, for delete actions.
    pub id: String,
    /// HTML-escaped title.
    pub title: String,
    /// Formatted date, or the stored text if it is not an ISO date.
    pub date: String,
    /// Hours to one decimal place.
    pub hours: String,
    /// Rate to two decimal places with the record's own currency.
    pub rate: String,
    /// Pay to two decimal places with the record's own currency.
    pub pay: String,
    /// Start time as entered.
    pub start_time: String,
    /// End time as entered.
    pub end_time: String,
    /// Overnight marker, present only for overnight shifts.
    pub overnight: Option<String>,
    /// Unpaid break minutes.
    pub break_mins: u32,
}

/// The full shift list handed to the render sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftListView {
    /// Rows ordered by date, most recent first.
    pub rows: Vec<ShiftRow>,
    /// Sum of all pay, labelled with the currently selected currency.
    pub grand_total: String,
    /// Number of records.
    pub count: usize,
}

impl ShiftListView {
    /// Whether there is nothing to list.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Live preview of the uncommitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    /// HTML-escaped title, or the untitled default.
    pub title: String,
    /// Net hours to one decimal place, `"0.0"` when not computable.
    pub hours: String,
    /// Pay to two decimal places with the currency label.
    pub pay: String,
    /// Calculation summary such as `"22.50/h × 8.0 h"`.
    pub rate_note: String,
}

/// Escapes text for inclusion in HTML markup.
///
/// # Examples
///
/// ```
/// use shift_ledger::ledger::escape_html;
///
/// assert_eq!(escape_html("<b>Bar & Grill</b>"), "&lt;b&gt;Bar &amp; Grill&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Returns `title` trimmed, or `untitled` if it is blank.
pub(crate) fn title_or_default(title: &str, untitled: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        untitled.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Formats `date`, returning `None` if `format` is not a valid chrono format.
fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut formatted = String::new();
    write!(formatted, "{}", date.format(format)).ok()?;
    Some(formatted)
}

pub(crate) fn build_row(record: &ShiftRecord, config: &LedgerConfig) -> ShiftRow {
    let date = record
        .parsed_date()
        .and_then(|date| format_date(date, &config.date_format))
        .unwrap_or_else(|| record.date.clone());

    ShiftRow {
        id: record.id.clone(),
        title: escape_html(&record.title),
        date: escape_html(&date),
        hours: format_fixed(record.hours, 1),
        rate: format_money(&escape_html(&record.currency), record.rate),
        pay: format_money(&escape_html(&record.currency), record.pay),
        start_time: escape_html(&record.start_time),
        end_time: escape_html(&record.end_time),
        overnight: record
            .overnight
            .then(|| escape_html(&config.overnight_marker)),
        break_mins: record.break_mins,
    }
}

pub(crate) fn build_preview(
    result: Option<&ShiftPay>,
    title: &str,
    currency: &str,
    config: &LedgerConfig,
) -> PreviewView {
    let title = escape_html(&title_or_default(title, &config.untitled_title));
    let currency = escape_html(currency);

    match result {
        Some(result) => PreviewView {
            title,
            hours: format_fixed(result.hours, 1),
            pay: format_money(&currency, result.pay),
            rate_note: result.rate_note(),
        },
        None => PreviewView {
            title,
            hours: format_fixed(Decimal::ZERO, 1),
            pay: format_money(&currency, Decimal::ZERO),
            rate_note: EMPTY_RATE_NOTE.to_string(),
        },
    }
}
