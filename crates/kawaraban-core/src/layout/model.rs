//! Layout domain models.

use serde::{Deserialize, Serialize};

/// How a section renders its photo slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SectionKind {
    /// A single large photo of the given height.
    Hero { height_mm: f64 },
    /// A uniform grid of square-cropped photos.
    Grid { columns: usize },
}

/// One named sub-region of a layout, holding a fixed-size slice of the
/// photo sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Stable key, used to address section-title overrides.
    pub key: String,
    /// Label printed above the section; `None` renders no label.
    /// Overridable per layout/section by the user.
    pub default_label: Option<String>,
    /// Number of photo slots this section consumes.
    pub slots: usize,
    pub kind: SectionKind,
}

/// A named page structure: photo capacity plus a fixed partition of that
/// capacity into sections.
///
/// Invariant (checked in the table tests): the section slot counts sum
/// to `photo_capacity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDefinition {
    pub id: String,
    pub display_name: String,
    pub photo_capacity: usize,
    /// Sections in render order; photos are dealt to them first to last.
    pub sections: Vec<SectionSpec>,
}

impl LayoutDefinition {
    /// Sum of the declared section slot counts.
    pub fn slot_sum(&self) -> usize {
        self.sections.iter().map(|s| s.slots).sum()
    }

    /// Finds a section spec by its key.
    pub fn section(&self, key: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.key == key)
    }
}
