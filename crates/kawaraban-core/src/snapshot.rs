//! Persisted session snapshot: model and repository trait.
//!
//! After every mutation the controller saves a best-effort snapshot of
//! the session's text fields (photos are deliberately excluded - their
//! data URIs are large and re-addable). On startup a snapshot is applied
//! only when it is younger than 24 hours; older ones are ignored
//! entirely.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::SessionState;

/// Snapshots older than this are ignored on load.
pub const SNAPSHOT_MAX_AGE_HOURS: i64 = 24;

/// The persisted subset of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub selected_month: Option<u32>,
    pub selected_layout_type: Option<String>,
    pub section_titles: HashMap<String, HashMap<String, String>>,
    pub event_title: String,
    pub event_date: Option<NaiveDate>,
    pub comment: String,
    pub saved_at: DateTime<Utc>,
}

impl SessionSnapshot {
    /// Captures the persistable fields of `state` at `saved_at`.
    pub fn from_state(state: &SessionState, saved_at: DateTime<Utc>) -> Self {
        Self {
            selected_month: state.selected_month,
            selected_layout_type: state.selected_layout_id.clone(),
            section_titles: state.section_title_overrides.clone(),
            event_title: state.event_title.clone(),
            event_date: state.event_date,
            comment: state.comment.clone(),
            saved_at,
        }
    }

    /// True when the snapshot is more than [`SNAPSHOT_MAX_AGE_HOURS`]
    /// old at `now`.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.saved_at) > Duration::hours(SNAPSHOT_MAX_AGE_HOURS)
    }

    /// Applies the snapshot onto a session state. Photos are untouched.
    pub fn apply_to(&self, state: &mut SessionState) {
        state.selected_month = self.selected_month;
        state.selected_layout_id = self.selected_layout_type.clone();
        state.section_title_overrides = self.section_titles.clone();
        state.event_title = self.event_title.clone();
        state.event_date = self.event_date;
        state.comment = self.comment.clone();
    }
}

/// Repository for the durable session snapshot.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Saves the snapshot, replacing any previous one.
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<()>;

    /// Loads the stored snapshot. Returns `None` when nothing is stored
    /// or the stored snapshot is stale.
    async fn load(&self) -> Result<Option<SessionSnapshot>>;

    /// Removes the stored snapshot, if any.
    async fn clear(&self) -> Result<()>;
}
