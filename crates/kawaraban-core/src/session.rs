//! Session domain model.
//!
//! `SessionState` is the mutable state behind one editing session:
//! selected month and layout, the ordered photo list, the event
//! title/date/comment, and the user's customization overrides. The
//! application layer owns a single instance and mutates it on every
//! user action.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{KawarabanError, Result};
use crate::layout;
use crate::template::{self, ColorScheme, MonthTemplate};

/// Photo limit when no layout is selected yet.
pub const DEFAULT_PHOTO_CAPACITY: usize = 20;

/// One uploaded photo. `data` is an opaque data URI produced by the
/// frontend's file reader; the core never decodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub data: String,
    pub name: String,
}

/// User-set font sizes overriding the layout defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizeOverride {
    pub title_pt: u32,
    pub comment_pt: u32,
}

/// Result of an add-photos request. `dropped > 0` drives the
/// user-facing capacity warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPhotosOutcome {
    pub added: usize,
    pub dropped: usize,
}

/// The mutable state of one editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub selected_month: Option<u32>,
    pub selected_layout_id: Option<String>,
    /// Insertion order; removal is by index.
    pub photos: Vec<Photo>,
    pub event_title: String,
    pub event_date: Option<NaiveDate>,
    pub comment: String,
    /// layout id -> section key -> user-supplied section title.
    pub section_title_overrides: HashMap<String, HashMap<String, String>>,
    pub color_override: Option<ColorScheme>,
    pub font_size_override: Option<FontSizeOverride>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The month template for the selected month, if any.
    pub fn current_template(&self) -> Option<&'static MonthTemplate> {
        self.selected_month.and_then(template::lookup)
    }

    /// Photo capacity of the active layout, falling back to
    /// [`DEFAULT_PHOTO_CAPACITY`] when no layout is selected.
    pub fn photo_capacity(&self) -> usize {
        self.selected_layout_id
            .as_deref()
            .and_then(layout::lookup)
            .map(|l| l.photo_capacity)
            .unwrap_or(DEFAULT_PHOTO_CAPACITY)
    }

    /// Selects a month and, when the event title is still empty, fills
    /// it with the template's default event name.
    pub fn select_month(&mut self, month: u32) -> Result<()> {
        let template =
            template::lookup(month).ok_or_else(|| KawarabanError::not_found("month", month.to_string()))?;
        self.selected_month = Some(month);
        if self.event_title.is_empty() {
            self.event_title = template.default_event_name.clone();
        }
        Ok(())
    }

    /// Selects a layout. The id must exist in the layout table; lookup
    /// misses at compose time still fail soft, but the UI only offers
    /// table entries, so an unknown id here is a caller bug.
    pub fn select_layout(&mut self, layout_id: &str) -> Result<()> {
        layout::lookup(layout_id)
            .ok_or_else(|| KawarabanError::not_found("layout", layout_id))?;
        self.selected_layout_id = Some(layout_id.to_string());
        Ok(())
    }

    /// Appends photos up to the remaining capacity, keeping the first N
    /// and silently dropping the rest. The outcome reports both counts.
    pub fn add_photos(&mut self, photos: Vec<Photo>) -> AddPhotosOutcome {
        let remaining = self.photo_capacity().saturating_sub(self.photos.len());
        let requested = photos.len();
        let added = requested.min(remaining);
        self.photos.extend(photos.into_iter().take(remaining));
        AddPhotosOutcome {
            added,
            dropped: requested - added,
        }
    }

    /// Removes and returns the photo at `index` (insertion order).
    pub fn remove_photo(&mut self, index: usize) -> Result<Photo> {
        if index >= self.photos.len() {
            return Err(KawarabanError::not_found("photo", index.to_string()));
        }
        Ok(self.photos.remove(index))
    }

    /// Sets a section title override for one layout/section pair.
    pub fn set_section_title(&mut self, layout_id: &str, section_key: &str, title: String) {
        self.section_title_overrides
            .entry(layout_id.to_string())
            .or_default()
            .insert(section_key.to_string(), title);
    }

    /// Section title overrides scoped to the given layout.
    pub fn section_titles_for(&self, layout_id: &str) -> HashMap<String, String> {
        self.section_title_overrides
            .get(layout_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Drops all customization overrides (colors, fonts, section titles).
    pub fn clear_customization(&mut self) {
        self.color_override = None;
        self.font_size_override = None;
        self.section_title_overrides.clear();
    }
}
