//! The fixed layout table.
//!
//! Five layouts, each declaring its own photo capacity and a fixed
//! partition of that capacity into sections. An unknown layout id fails
//! soft: composition substitutes the default grid layout so a page can
//! always be produced.

use once_cell::sync::Lazy;

use super::model::{LayoutDefinition, SectionKind, SectionSpec};

/// Substituted when an unknown layout id is requested.
pub const DEFAULT_LAYOUT_ID: &str = "grid-5x4";

fn hero(key: &str, label: Option<&str>, height_mm: f64) -> SectionSpec {
    SectionSpec {
        key: key.to_string(),
        default_label: label.map(|s| s.to_string()),
        slots: 1,
        kind: SectionKind::Hero { height_mm },
    }
}

fn grid(key: &str, label: Option<&str>, slots: usize, columns: usize) -> SectionSpec {
    SectionSpec {
        key: key.to_string(),
        default_label: label.map(|s| s.to_string()),
        slots,
        kind: SectionKind::Grid { columns },
    }
}

fn layout(id: &str, display_name: &str, sections: Vec<SectionSpec>) -> LayoutDefinition {
    let photo_capacity = sections.iter().map(|s| s.slots).sum();
    LayoutDefinition {
        id: id.to_string(),
        display_name: display_name.to_string(),
        photo_capacity,
        sections,
    }
}

static LAYOUTS: Lazy<Vec<LayoutDefinition>> = Lazy::new(|| {
    vec![
        // 20 photos in one uniform 5-column grid.
        layout(
            "grid-5x4",
            "標準グリッド (5×4)",
            vec![grid("photos", None, 20, 5)],
        ),
        // Hero photo next to a 3-column grid of 11.
        layout(
            "magazine-2col",
            "2段新聞スタイル",
            vec![
                hero("hero", Some("メイン写真"), 120.0),
                grid("grid", Some("活動の様子"), 11, 3),
            ],
        ),
        // Three labeled 2-column grids of 5 each.
        layout(
            "magazine-3col",
            "3段新聞スタイル (泉平風)",
            vec![
                grid("section1", Some("活動①"), 5, 2),
                grid("section2", Some("活動②"), 5, 2),
                grid("section3", Some("活動③"), 5, 2),
            ],
        ),
        // Unlabeled hero photo over a 4-column grid of 12.
        layout(
            "feature-spotlight",
            "ヒーロー写真スタイル",
            vec![
                hero("hero", None, 90.0),
                grid("grid", Some("その他の様子"), 12, 4),
            ],
        ),
        // Wide morning section over two side-by-side sections.
        layout(
            "mixed-sections",
            "混合セクション",
            vec![
                grid("morning", Some("午前の部"), 6, 3),
                grid("afternoon", Some("午後の部"), 6, 2),
                grid("ending", Some("エンディング"), 6, 2),
            ],
        ),
    ]
});

/// Looks up a layout by id.
pub fn lookup(layout_id: &str) -> Option<&'static LayoutDefinition> {
    LAYOUTS.iter().find(|l| l.id == layout_id)
}

/// Looks up a layout by id, substituting the default grid layout for
/// unknown ids.
pub fn lookup_or_default(layout_id: &str) -> &'static LayoutDefinition {
    lookup(layout_id).unwrap_or_else(|| {
        lookup(DEFAULT_LAYOUT_ID).expect("default layout must exist in the table")
    })
}

/// All layouts, in table order. Used by the UI layout picker.
pub fn all_layouts() -> impl Iterator<Item = &'static LayoutDefinition> {
    LAYOUTS.iter()
}
