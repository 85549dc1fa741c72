//! The fixed twelve-entry month template table.
//!
//! No runtime construction happens here: the table is built once and
//! looked up by month number. A month outside 1-12 simply yields `None`.

use std::collections::BTreeMap;

use chrono::{Datelike, Local};
use once_cell::sync::Lazy;

use super::model::{ColorScheme, MonthTemplate};

fn entry(
    month: u32,
    name: &str,
    theme: &str,
    colors: ColorScheme,
    decorations: &[&str],
    default_event_name: &str,
    comment_pool: &[&str],
) -> (u32, MonthTemplate) {
    (
        month,
        MonthTemplate {
            month,
            name: name.to_string(),
            theme: theme.to_string(),
            colors,
            decorations: decorations.iter().map(|s| s.to_string()).collect(),
            default_event_name: default_event_name.to_string(),
            comment_pool: comment_pool.iter().map(|s| s.to_string()).collect(),
        },
    )
}

static MONTH_TEMPLATES: Lazy<BTreeMap<u32, MonthTemplate>> = Lazy::new(|| {
    BTreeMap::from([
        entry(
            1,
            "新年会",
            "新年",
            ColorScheme::new("#DC143C", "#FFD700", "#FFF8DC"),
            &["🎍", "🎌", "🌅", "🎊"],
            "新年お楽しみ会",
            &[
                "新しい年を皆様と笑顔で迎えることができました。",
                "今年も元気に楽しく過ごしましょう!",
                "令和{year}年も、笑顔あふれる一年になりますように。",
                "新年を祝い、皆で楽しいひと時を過ごしました。",
            ],
        ),
        entry(
            2,
            "節分",
            "節分",
            ColorScheme::new("#4169E1", "#FFD700", "#F0F8FF"),
            &["👹", "🫘", "🎭", "🌸"],
            "節分豆まき大会",
            &[
                "鬼は外!福は内!元気な掛け声が響きました。",
                "今年も無病息災を願い、豆まきを楽しみました。",
                "鬼退治で盛り上がり、福を呼び込みました。",
                "皆様の健康と幸せを願って、楽しく豆まきをしました。",
            ],
        ),
        entry(
            3,
            "ひな祭り",
            "ひな祭り",
            ColorScheme::new("#FF69B4", "#FFB6C1", "#FFF0F5"),
            &["🎎", "🌸", "🍡", "🎀"],
            "ひな祭りお祝い会",
            &[
                "春の訪れを感じながら、ひな祭りを祝いました。",
                "皆様と一緒に、華やかなひな祭りを楽しみました。",
                "桃の節句、笑顔いっぱいのお祝いとなりました。",
                "春の訪れと共に、楽しいひと時を過ごしました。",
            ],
        ),
        entry(
            4,
            "お花見",
            "お花見",
            ColorScheme::new("#FFB7C5", "#FFC0CB", "#FFF5EE"),
            &["🌸", "🌺", "🦋", "🍱"],
            "お花見会",
            &[
                "満開の桜の下、楽しいお花見となりました。",
                "春の陽気の中、美しい桜を楽しみました。",
                "桜を愛でながら、和やかなひと時を過ごしました。",
                "きれいな桜に囲まれ、笑顔あふれる一日でした。",
            ],
        ),
        entry(
            5,
            "端午の節句",
            "端午の節句",
            ColorScheme::new("#228B22", "#4169E1", "#F0FFF0"),
            &["🎏", "⚔️", "🌿", "🍵"],
            "端午の節句お祝い会",
            &[
                "鯉のぼりのように元気に、楽しい会となりました。",
                "皆様の健康を願い、端午の節句を祝いました。",
                "初夏の爽やかな季節を、楽しく過ごしました。",
                "元気いっぱい、鯉のぼりとともにお祝いしました。",
            ],
        ),
        entry(
            6,
            "紫陽花鑑賞",
            "紫陽花",
            ColorScheme::new("#9370DB", "#87CEEB", "#F0F8FF"),
            &["💜", "☔", "🐌", "💧"],
            "紫陽花鑑賞会",
            &[
                "美しい紫陽花を眺めながら、梅雨の季節を楽しみました。",
                "色とりどりの紫陽花に囲まれ、癒しの時間となりました。",
                "雨の季節も、紫陽花と共に笑顔で過ごしました。",
                "梅雨の風物詩、紫陽花を愛でる素敵な会となりました。",
            ],
        ),
        entry(
            7,
            "七夕",
            "七夕",
            ColorScheme::new("#4169E1", "#FFD700", "#F0F8FF"),
            &["🎋", "⭐", "🌌", "💫"],
            "七夕まつり",
            &[
                "願いを込めた短冊を飾り、楽しい七夕となりました。",
                "星に願いを届け、笑顔あふれる会となりました。",
                "皆様の願いが叶いますように、七夕を祝いました。",
                "短冊に想いを込めて、素敵な七夕を過ごしました。",
            ],
        ),
        entry(
            8,
            "夏祭り",
            "夏祭り",
            ColorScheme::new("#DC143C", "#FFD700", "#FFFACD"),
            &["🎆", "🏮", "🍉", "🎐"],
            "夏祭り",
            &[
                "夏の風物詩、楽しい夏祭りとなりました。",
                "提灯の灯りの下、盛大な夏祭りを楽しみました。",
                "暑い夏も、皆で楽しく盛り上がりました。",
                "夏の思い出に残る、素敵なお祭りとなりました。",
            ],
        ),
        entry(
            9,
            "敬老の日",
            "敬老の日",
            ColorScheme::new("#FF8C00", "#FFD700", "#FFF8DC"),
            &["💐", "🎁", "💝", "🌻"],
            "敬老の日お祝い会",
            &[
                "日頃の感謝を込めて、楽しい会となりました。",
                "いつまでもお元気で、笑顔でいてくださいね。",
                "皆様への感謝の気持ちを込めて、お祝いしました。",
                "敬老の日、心温まる素敵な一日となりました。",
            ],
        ),
        entry(
            10,
            "運動会",
            "運動会",
            ColorScheme::new("#DC143C", "#4169E1", "#FFF8DC"),
            &["🏃", "🎯", "🏅", "🎊"],
            "秋の大運動会",
            &[
                "秋晴れの下、元気いっぱい運動会を楽しみました。",
                "皆で体を動かし、笑顔あふれる運動会となりました。",
                "紅葉の季節、楽しい運動会で盛り上がりました。",
                "元気に競技を楽しみ、素敵な思い出ができました。",
            ],
        ),
        entry(
            11,
            "紅葉狩り",
            "紅葉",
            ColorScheme::new("#FF6347", "#FFD700", "#FFF8DC"),
            &["🍁", "🍂", "🌰", "🦌"],
            "紅葉鑑賞会",
            &[
                "美しい紅葉を眺めながら、秋を満喫しました。",
                "色づいた木々に囲まれ、素敵な秋の一日となりました。",
                "紅葉の美しさに心癒される、楽しい会となりました。",
                "秋の風物詩、紅葉狩りを楽しみました。",
            ],
        ),
        entry(
            12,
            "クリスマス",
            "クリスマス",
            ColorScheme::new("#DC143C", "#228B22", "#FFF8DC"),
            &["🎄", "🎅", "⛄", "🎁"],
            "クリスマス会",
            &[
                "メリークリスマス!楽しいクリスマス会となりました。",
                "サンタさんも来て、笑顔いっぱいの会となりました。",
                "心温まるクリスマスを、皆で楽しみました。",
                "今年最後の大イベント、素敵なクリスマスとなりました。",
            ],
        ),
    ])
});

/// Looks up the template for a calendar month (1-12).
pub fn lookup(month: u32) -> Option<&'static MonthTemplate> {
    MONTH_TEMPLATES.get(&month)
}

/// All twelve templates, in month order. Used by the UI month picker.
pub fn all_templates() -> impl Iterator<Item = &'static MonthTemplate> {
    MONTH_TEMPLATES.values()
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_twelve_months_present() {
        for month in 1..=12 {
            let template = lookup(month).expect("missing month template");
            assert_eq!(template.month, month);
            assert!(!template.decorations.is_empty());
            assert!(!template.comment_pool.is_empty());
            assert!(!template.default_event_name.is_empty());
        }
    }

    #[test]
    fn test_out_of_range_months_not_found() {
        assert!(lookup(0).is_none());
        assert!(lookup(13).is_none());
    }

    #[test]
    fn test_comment_pool_has_at_most_one_year_placeholder() {
        for template in all_templates() {
            for comment in &template.comment_pool {
                assert!(comment.matches("{year}").count() <= 1, "{}", comment);
            }
        }
    }

    #[test]
    fn test_march_is_hinamatsuri() {
        let template = lookup(3).unwrap();
        assert_eq!(template.name, "ひな祭り");
        assert_eq!(template.colors.primary, "#FF69B4");
        assert_eq!(template.decorations[0], "🎎");
    }

    #[test]
    fn test_all_templates_is_month_ordered() {
        let months: Vec<u32> = all_templates().map(|t| t.month).collect();
        assert_eq!(months, (1..=12).collect::<Vec<u32>>());
    }
}
