//! The fixed twelve-entry materials table.
//!
//! One entry per calendar month, built once and looked up by month
//! number. A month outside 1-12 yields `None` and the page simply
//! renders without decoration materials.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::model::{BackgroundPattern, BorderStyle, MonthMaterials};

fn entry(
    month: u32,
    background_pattern: BackgroundPattern,
    pattern_colors: [&str; 2],
    corner_glyphs: [&str; 4],
    sidebar_glyphs: &[&str],
    border_style: BorderStyle,
    border_color: &str,
    accent_label: &str,
) -> (u32, MonthMaterials) {
    (
        month,
        MonthMaterials {
            month,
            background_pattern,
            pattern_colors: pattern_colors.map(|s| s.to_string()),
            corner_glyphs: corner_glyphs.map(|s| s.to_string()),
            sidebar_glyphs: sidebar_glyphs.iter().map(|s| s.to_string()).collect(),
            border_style,
            border_color: border_color.to_string(),
            accent_label: accent_label.to_string(),
        },
    )
}

static MONTH_MATERIALS: Lazy<BTreeMap<u32, MonthMaterials>> = Lazy::new(|| {
    BTreeMap::from([
        entry(
            1,
            BackgroundPattern::DiagonalLines,
            ["#DC143C", "#FFD700"],
            ["🎍", "🎌", "🎊", "🌅"],
            &["🎍", "🌅", "🎊", "🎌", "✨"],
            BorderStyle::Double,
            "#DC143C",
            "謹賀新年",
        ),
        entry(
            2,
            BackgroundPattern::Dots,
            ["#4169E1", "#FFD700"],
            ["👹", "🫘", "🎭", "🌸"],
            &["👹", "🫘", "🫘", "🎭", "💥"],
            BorderStyle::Dashed,
            "#4169E1",
            "鬼は外！",
        ),
        entry(
            3,
            BackgroundPattern::SakuraDots,
            ["#FF69B4", "#FFB6C1"],
            ["🎎", "🌸", "🍡", "🎀"],
            &["🌸", "🎎", "🌸", "🍡", "🌸"],
            BorderStyle::Solid,
            "#FF69B4",
            "桃の節句",
        ),
        entry(
            4,
            BackgroundPattern::PetalScatter,
            ["#FFB7C5", "#FFC0CB"],
            ["🌸", "🦋", "🌸", "🌺"],
            &["🌸", "🦋", "🌸", "🌺", "🌸"],
            BorderStyle::Solid,
            "#FFB7C5",
            "花見日和",
        ),
        entry(
            5,
            BackgroundPattern::DiagonalLines,
            ["#228B22", "#4169E1"],
            ["🎏", "⚔️", "🌿", "🍵"],
            &["🎏", "🌿", "🎏", "⚔️", "🍵"],
            BorderStyle::Solid,
            "#228B22",
            "端午の節句",
        ),
        entry(
            6,
            BackgroundPattern::RainDrops,
            ["#9370DB", "#87CEEB"],
            ["💜", "☔", "🐌", "💧"],
            &["💜", "💧", "🐌", "☔", "💧"],
            BorderStyle::Solid,
            "#9370DB",
            "雨の季節",
        ),
        entry(
            7,
            BackgroundPattern::Stars,
            ["#4169E1", "#FFD700"],
            ["🎋", "⭐", "🌌", "💫"],
            &["⭐", "🎋", "💫", "⭐", "🌌"],
            BorderStyle::Solid,
            "#4169E1",
            "七夕まつり",
        ),
        entry(
            8,
            BackgroundPattern::Zigzag,
            ["#DC143C", "#FFD700"],
            ["🎆", "🏮", "🍉", "🎐"],
            &["🏮", "🎆", "🍉", "🎐", "✨"],
            BorderStyle::Double,
            "#DC143C",
            "夏祭り",
        ),
        entry(
            9,
            BackgroundPattern::Dots,
            ["#FF8C00", "#FFD700"],
            ["💐", "🎁", "💝", "🌻"],
            &["💐", "🌻", "💝", "🎁", "💐"],
            BorderStyle::Solid,
            "#FF8C00",
            "感謝を込めて",
        ),
        entry(
            10,
            BackgroundPattern::DiagonalLines,
            ["#DC143C", "#4169E1"],
            ["🏃", "🎯", "🏅", "🎊"],
            &["🏅", "🎯", "🏃", "🎊", "🏅"],
            BorderStyle::Dashed,
            "#DC143C",
            "頑張れ！",
        ),
        entry(
            11,
            BackgroundPattern::LeafScatter,
            ["#FF6347", "#FFD700"],
            ["🍁", "🍂", "🌰", "🦌"],
            &["🍁", "🍂", "🍁", "🌰", "🍂"],
            BorderStyle::Solid,
            "#FF6347",
            "秋の深まり",
        ),
        entry(
            12,
            BackgroundPattern::Snowflakes,
            ["#DC143C", "#228B22"],
            ["🎄", "🎅", "⛄", "🎁"],
            &["🎄", "⭐", "🎁", "⛄", "🎅"],
            BorderStyle::Double,
            "#DC143C",
            "Merry Xmas!",
        ),
    ])
});

/// Looks up the materials for a calendar month (1-12).
pub fn lookup(month: u32) -> Option<&'static MonthMaterials> {
    MONTH_MATERIALS.get(&month)
}

/// All twelve material records, in month order.
pub fn all_materials() -> impl Iterator<Item = &'static MonthMaterials> {
    MONTH_MATERIALS.values()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_twelve_months_present() {
        for month in 1..=12 {
            let materials = lookup(month).expect("missing month materials");
            assert_eq!(materials.month, month);
            assert_eq!(materials.sidebar_glyphs.len(), 5);
            assert!(!materials.accent_label.is_empty());
            assert!(materials.border_color.starts_with('#'));
        }
    }

    #[test]
    fn test_out_of_range_months_not_found() {
        assert!(lookup(0).is_none());
        assert!(lookup(13).is_none());
    }

    #[test]
    fn test_january_materials() {
        let materials = lookup(1).unwrap();
        assert_eq!(materials.background_pattern, BackgroundPattern::DiagonalLines);
        assert_eq!(materials.border_style, BorderStyle::Double);
        assert_eq!(materials.accent_label, "謹賀新年");
        assert_eq!(materials.corner_glyphs[0], "🎍");
    }

    #[test]
    fn test_pattern_serializes_as_kebab_case() {
        let json = serde_json::to_value(BackgroundPattern::SakuraDots).unwrap();
        assert_eq!(json, "sakura-dots");
        let json = serde_json::to_value(BorderStyle::Dashed).unwrap();
        assert_eq!(json, "dashed");
    }
}
