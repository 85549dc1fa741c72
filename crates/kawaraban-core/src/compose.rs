//! The page composer.
//!
//! Merges a layout, a month template, the photo list, and the user's
//! text into a [`PageDescription`]. This is a pure function: customization
//! comes in through [`ComposeOverrides`], and the output either is a
//! usable page or a well-defined fallback (default layout on an unknown
//! id, placeholder region when there are no photos). No rasterization,
//! no I/O, no measurement happens here.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::layout::{self, SectionKind};
use crate::materials;
use crate::page::{
    CommentRegion, FooterRegion, HeaderRegion, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PageDescription,
    PageRegion,
};
use crate::session::Photo;
use crate::template::{ColorScheme, MonthTemplate};

/// Title printed when the user left the event title empty.
pub const DEFAULT_EVENT_TITLE: &str = "イベント";

/// Placeholder message for a page without photos.
pub const NO_PHOTOS_MESSAGE: &str = "写真がありません";

pub const DEFAULT_TITLE_FONT_PT: u32 = 26;
pub const DEFAULT_COMMENT_FONT_PT: u32 = 11;

/// Explicit customization inputs to [`compose`].
///
/// `section_titles` is already scoped to the layout being composed
/// (section key -> user title).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComposeOverrides {
    #[serde(default)]
    pub section_titles: HashMap<String, String>,
    pub colors: Option<ColorScheme>,
    pub title_font_pt: Option<u32>,
    pub comment_font_pt: Option<u32>,
}

/// Formats a date as "Y年M月D日" from local calendar fields, without
/// zero padding.
pub fn format_japanese_date(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// Composes a single page.
///
/// Steps, in order: resolve the layout (fail-soft to the default grid),
/// truncate photos to capacity, deal photos to the layout's sections
/// first to last, then assemble header, photo regions, optional comment,
/// footer, and the month's decoration materials under the effective
/// color scheme.
pub fn compose(
    layout_id: &str,
    template: &MonthTemplate,
    photos: &[Photo],
    event_title: &str,
    event_date: Option<NaiveDate>,
    comment: &str,
    overrides: &ComposeOverrides,
) -> PageDescription {
    let layout = layout::lookup_or_default(layout_id);
    let photo_count = photos.len().min(layout.photo_capacity);

    let colors = overrides
        .colors
        .clone()
        .unwrap_or_else(|| template.colors.clone());

    let title = if event_title.is_empty() {
        DEFAULT_EVENT_TITLE.to_string()
    } else {
        event_title.to_string()
    };

    let header = HeaderRegion {
        title,
        date_text: event_date.map(format_japanese_date),
        glyph: template.decorations[0].clone(),
        title_font_pt: overrides.title_font_pt.unwrap_or(DEFAULT_TITLE_FONT_PT),
    };

    let regions = if photo_count == 0 {
        vec![PageRegion::Placeholder {
            message: NO_PHOTOS_MESSAGE.to_string(),
        }]
    } else {
        partition_photos(layout, photo_count, &overrides.section_titles)
    };

    let comment_region = if comment.is_empty() {
        None
    } else {
        Some(CommentRegion {
            text: comment.to_string(),
            font_pt: overrides
                .comment_font_pt
                .unwrap_or(DEFAULT_COMMENT_FONT_PT),
        })
    };

    PageDescription {
        layout_id: layout.id.clone(),
        colors,
        width_mm: PAGE_WIDTH_MM,
        height_mm: PAGE_HEIGHT_MM,
        header,
        regions,
        comment: comment_region,
        footer: FooterRegion {
            glyphs: template.decorations.clone(),
        },
        materials: materials::lookup(template.month).cloned(),
    }
}

/// Deals `photo_count` photo indices to the layout's sections in fixed
/// order. Each section receives exactly its declared slot count; the
/// tail section may receive fewer, and sections left with no photos
/// render nothing at all.
fn partition_photos(
    layout: &layout::LayoutDefinition,
    photo_count: usize,
    section_titles: &HashMap<String, String>,
) -> Vec<PageRegion> {
    let mut regions = Vec::with_capacity(layout.sections.len());
    let mut cursor = 0usize;

    for spec in &layout.sections {
        let take = spec.slots.min(photo_count - cursor);
        if take == 0 {
            continue;
        }
        let label = section_titles
            .get(&spec.key)
            .cloned()
            .or_else(|| spec.default_label.clone());

        match spec.kind {
            SectionKind::Hero { height_mm } => {
                regions.push(PageRegion::Hero {
                    label,
                    photo_index: cursor,
                    height_mm,
                });
            }
            SectionKind::Grid { columns } => {
                regions.push(PageRegion::PhotoGrid {
                    label,
                    photo_indices: (cursor..cursor + take).collect(),
                    columns,
                });
            }
        }
        cursor += take;
    }

    regions
}
