//! Month template domain models.
//!
//! A month template is the themed record behind one calendar month:
//! its color scheme, decorative glyphs, default event name, and the
//! pool of candidate comment strings the generator picks from.

use serde::{Deserialize, Serialize};

/// The effective color triple of a page: header/border primary,
/// accent secondary, and page background. Values are CSS hex colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
}

impl ColorScheme {
    pub fn new(primary: &str, secondary: &str, background: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            background: background.to_string(),
        }
    }
}

/// A themed record for one calendar month.
///
/// Templates are immutable and live in the static table in
/// [`crate::template::table`]; they are never constructed at runtime.
///
/// Invariants (guaranteed by the table, checked in its tests):
/// - `decorations` is non-empty; index 0 brackets the page header.
/// - `comment_pool` is non-empty; entries contain at most one `{year}`
///   placeholder token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTemplate {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Display name of the month's signature event (e.g. "ひな祭り").
    pub name: String,
    /// Short theme label.
    pub theme: String,
    /// Default page colors for this month.
    pub colors: ColorScheme,
    /// Decorative glyphs, in display order.
    pub decorations: Vec<String>,
    /// Event name pre-filled when the user has not typed one.
    pub default_event_name: String,
    /// Candidate comment strings; `{year}` is replaced at generation time.
    pub comment_pool: Vec<String>,
}
