//! Session snapshot DTO.
//!
//! The stored JSON uses camelCase field names and an ISO-8601 `savedAt`
//! timestamp:
//!
//! ```json
//! {
//!   "selectedMonth": 3,
//!   "selectedLayoutType": "magazine-3col",
//!   "sectionTitles": { "magazine-3col": { "section1": "体操の時間" } },
//!   "eventTitle": "ひな祭りお祝い会",
//!   "eventDate": "2026-03-03",
//!   "comment": "🎎 ... 🎎",
//!   "savedAt": "2026-03-03T05:00:00Z"
//! }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use kawaraban_core::snapshot::SessionSnapshot;

/// On-disk shape of [`SessionSnapshot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshotDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_layout_type: Option<String>,
    #[serde(default)]
    pub section_titles: HashMap<String, HashMap<String, String>>,
    #[serde(default)]
    pub event_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub comment: String,
    pub saved_at: DateTime<Utc>,
}

impl From<&SessionSnapshot> for SessionSnapshotDto {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            selected_month: snapshot.selected_month,
            selected_layout_type: snapshot.selected_layout_type.clone(),
            section_titles: snapshot.section_titles.clone(),
            event_title: snapshot.event_title.clone(),
            event_date: snapshot.event_date,
            comment: snapshot.comment.clone(),
            saved_at: snapshot.saved_at,
        }
    }
}

impl From<SessionSnapshotDto> for SessionSnapshot {
    fn from(dto: SessionSnapshotDto) -> Self {
        Self {
            selected_month: dto.selected_month,
            selected_layout_type: dto.selected_layout_type,
            section_titles: dto.section_titles,
            event_title: dto.event_title,
            event_date: dto.event_date,
            comment: dto.comment,
            saved_at: dto.saved_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let dto = SessionSnapshotDto {
            selected_month: Some(3),
            selected_layout_type: Some("magazine-3col".to_string()),
            section_titles: HashMap::new(),
            event_title: "ひな祭りお祝い会".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 3, 3),
            comment: String::new(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["selectedMonth"], 3);
        assert_eq!(json["selectedLayoutType"], "magazine-3col");
        assert_eq!(json["eventTitle"], "ひな祭りお祝い会");
        assert_eq!(json["eventDate"], "2026-03-03");
        assert!(json["savedAt"].is_string());
    }

    #[test]
    fn test_deserializes_minimal_document() {
        let json = r#"{ "savedAt": "2026-03-03T05:00:00Z" }"#;
        let dto: SessionSnapshotDto = serde_json::from_str(json).unwrap();
        assert!(dto.selected_month.is_none());
        assert!(dto.event_title.is_empty());
    }
}
