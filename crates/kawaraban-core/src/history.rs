//! Undo history.
//!
//! A bounded ring of deep-copied session snapshots. A snapshot is pushed
//! before every destructive action; undo pops the newest. On overflow the
//! oldest entry is evicted (FIFO eviction, LIFO restoration).

use std::collections::HashMap;
use std::collections::VecDeque;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::session::{Photo, SessionState};

/// Maximum number of undo steps kept.
pub const HISTORY_CAPACITY: usize = 5;

/// A deep copy of the mutable subset of [`SessionState`].
///
/// Customization overrides for colors and fonts are deliberately not
/// captured: undo covers content edits, not theming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub selected_month: Option<u32>,
    pub selected_layout_id: Option<String>,
    pub photos: Vec<Photo>,
    pub event_title: String,
    pub event_date: Option<NaiveDate>,
    pub comment: String,
    pub section_title_overrides: HashMap<String, HashMap<String, String>>,
}

impl HistorySnapshot {
    /// Captures the current session state.
    pub fn capture(state: &SessionState) -> Self {
        Self {
            selected_month: state.selected_month,
            selected_layout_id: state.selected_layout_id.clone(),
            photos: state.photos.clone(),
            event_title: state.event_title.clone(),
            event_date: state.event_date,
            comment: state.comment.clone(),
            section_title_overrides: state.section_title_overrides.clone(),
        }
    }

    /// Restores the captured fields onto `state` verbatim.
    pub fn restore(self, state: &mut SessionState) {
        state.selected_month = self.selected_month;
        state.selected_layout_id = self.selected_layout_id;
        state.photos = self.photos;
        state.event_title = self.event_title;
        state.event_date = self.event_date;
        state.comment = self.comment;
        state.section_title_overrides = self.section_title_overrides;
    }
}

/// The bounded undo stack.
#[derive(Debug, Default)]
pub struct HistoryStack {
    entries: VecDeque<HistorySnapshot>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a snapshot, evicting the oldest entry when full.
    pub fn push(&mut self, snapshot: HistorySnapshot) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    /// Pops the most recent snapshot; `None` when the history is empty.
    pub fn pop(&mut self) -> Option<HistorySnapshot> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_title(title: &str) -> SessionState {
        SessionState {
            event_title: title.to_string(),
            ..SessionState::default()
        }
    }

    #[test]
    fn test_capture_restore_roundtrip() {
        let mut state = SessionState::new();
        state.select_month(3).unwrap();
        state.select_layout("mixed-sections").unwrap();
        state.comment = "🌸 楽しい会でした 🌸".to_string();

        let snapshot = HistorySnapshot::capture(&state);
        let mut other = SessionState::new();
        snapshot.restore(&mut other);
        assert_eq!(other, state);
    }

    #[test]
    fn test_restore_does_not_touch_theme_overrides() {
        let mut state = SessionState::new();
        state.font_size_override = Some(crate::session::FontSizeOverride {
            title_pt: 30,
            comment_pt: 12,
        });
        let snapshot = HistorySnapshot::capture(&state_with_title("a"));
        snapshot.restore(&mut state);
        assert!(state.font_size_override.is_some());
    }

    #[test]
    fn test_pop_on_empty_is_none() {
        let mut stack = HistoryStack::new();
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_fifo_eviction_lifo_restoration() {
        let mut stack = HistoryStack::new();
        for i in 0..6 {
            stack.push(HistorySnapshot::capture(&state_with_title(&format!(
                "t{}",
                i
            ))));
        }
        assert_eq!(stack.len(), HISTORY_CAPACITY);

        // t0 was evicted; the five most recent come back newest-first.
        for i in (1..6).rev() {
            let snapshot = stack.pop().unwrap();
            assert_eq!(snapshot.event_title, format!("t{}", i));
        }
        assert!(stack.pop().is_none());
    }
}
