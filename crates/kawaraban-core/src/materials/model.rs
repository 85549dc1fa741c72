//! Decoration material models.
//!
//! Materials dress the composed page beyond the layout itself: a tiled
//! background pattern, corner and sidebar glyphs, a seasonal accent
//! badge, and the page border. Like the page description, these are
//! pure data; the frontend renderer turns them into styles.

use serde::{Deserialize, Serialize};

/// Tiled page background pattern. The renderer maps each variant to a
/// CSS gradient recipe tinted with the month's pattern colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundPattern {
    DiagonalLines,
    Dots,
    SakuraDots,
    PetalScatter,
    Stars,
    Snowflakes,
    RainDrops,
    Zigzag,
    LeafScatter,
}

/// Page border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Double,
}

/// Seasonal decoration materials for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthMaterials {
    /// Calendar month, 1-12.
    pub month: u32,
    pub background_pattern: BackgroundPattern,
    /// Two pattern tint colors (CSS hex), strongest first.
    pub pattern_colors: [String; 2],
    /// Corner glyphs in top-left, top-right, bottom-left, bottom-right
    /// order.
    pub corner_glyphs: [String; 4],
    /// Glyph column repeated down both page margins.
    pub sidebar_glyphs: Vec<String>,
    pub border_style: BorderStyle,
    /// Border color (CSS hex).
    pub border_color: String,
    /// Short seasonal badge printed under the header (e.g. "謹賀新年").
    pub accent_label: String,
}
