//! The renderable page description.
//!
//! This is the composer's output: a data tree describing what the page
//! contains, consumed by the frontend renderer / PDF rasterizer. Photos
//! are referenced by index into the session's photo list; the tree never
//! carries image bytes itself.

use serde::{Deserialize, Serialize};

use crate::materials::MonthMaterials;
use crate::template::ColorScheme;

/// A4 portrait, in millimeters.
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// The page header: event title and date, bracketed by a glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderRegion {
    pub title: String,
    /// Pre-formatted as "Y年M月D日"; `None` when no date was set.
    pub date_text: Option<String>,
    /// Decoration glyph rendered on both sides of the title.
    pub glyph: String,
    pub title_font_pt: u32,
}

/// A photo-bearing (or placeholder) block of the page body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PageRegion {
    /// One large photo.
    Hero {
        label: Option<String>,
        photo_index: usize,
        height_mm: f64,
    },
    /// A uniform grid of square-cropped photos.
    PhotoGrid {
        label: Option<String>,
        photo_indices: Vec<usize>,
        columns: usize,
    },
    /// Rendered instead of empty sections when there are no photos.
    Placeholder { message: String },
}

/// The free-text comment block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRegion {
    pub text: String,
    pub font_pt: u32,
}

/// The footer: the full ordered decoration list, space-joined by the
/// renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterRegion {
    pub glyphs: Vec<String>,
}

/// A complete single-page description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDescription {
    /// The layout that was actually composed (after default substitution).
    pub layout_id: String,
    /// Effective colors: header, section labels, photo borders, comment
    /// border, and page border all draw from this triple.
    pub colors: ColorScheme,
    pub width_mm: f64,
    pub height_mm: f64,
    pub header: HeaderRegion,
    pub regions: Vec<PageRegion>,
    pub comment: Option<CommentRegion>,
    pub footer: FooterRegion,
    /// Seasonal decoration materials for the month: background pattern,
    /// corner/sidebar glyphs, accent badge, page border. `None` when the
    /// month has no materials entry.
    pub materials: Option<MonthMaterials>,
}

impl PageDescription {
    /// All photo indices referenced by the page, in render order.
    pub fn photo_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        for region in &self.regions {
            match region {
                PageRegion::Hero { photo_index, .. } => indices.push(*photo_index),
                PageRegion::PhotoGrid { photo_indices, .. } => {
                    indices.extend(photo_indices.iter().copied())
                }
                PageRegion::Placeholder { .. } => {}
            }
        }
        indices
    }
}
