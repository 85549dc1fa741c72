//! Comment generation.
//!
//! Given a month template, picks one comment string from its pool,
//! substitutes the current year, prefixes the event date and title, and
//! brackets the whole thing with a decoration glyph. The template is an
//! explicit parameter; there is no generator state. Randomness is plain
//! `thread_rng` - independent calls may differ, which is the point.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::template::{MonthTemplate, current_year};

/// Placeholder returned by the controller when the user asks for a
/// comment before selecting a month.
pub const NO_TEMPLATE_MESSAGE: &str = "テンプレートが選択されていません。";

/// Generates one comment for the given template.
///
/// Output shape: `"<deco> [M月D日、][「title」を開催しました。\n\n]<pool entry> <deco>"`
/// with `{year}` in the pool entry replaced by the current calendar year.
pub fn generate(
    template: &MonthTemplate,
    event_title: &str,
    event_date: Option<NaiveDate>,
) -> String {
    generate_with_rng(&mut rand::thread_rng(), template, event_title, event_date)
}

/// Same as [`generate`], with the RNG injected for deterministic tests.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    template: &MonthTemplate,
    event_title: &str,
    event_date: Option<NaiveDate>,
) -> String {
    let pool = &template.comment_pool;
    let picked = &pool[rng.gen_range(0..pool.len())];
    let body = picked.replace("{year}", &current_year().to_string());

    let mut text = String::new();
    if let Some(date) = event_date {
        // Local calendar fields, no zero padding.
        text.push_str(&format!("{}月{}日、", date.month(), date.day()));
    }
    if !event_title.is_empty() {
        text.push_str(&format!("「{}」を開催しました。\n\n", event_title));
    }
    text.push_str(&body);

    let decorations = &template.decorations;
    let deco = &decorations[rng.gen_range(0..decorations.len())];
    format!("{} {} {}", deco, text, deco)
}

/// Generates `count` comments independently (no deduplication).
pub fn generate_batch(
    template: &MonthTemplate,
    event_title: &str,
    event_date: Option<NaiveDate>,
    count: usize,
) -> Vec<String> {
    (0..count)
        .map(|_| generate(template, event_title, event_date))
        .collect()
}

/// Generates a comment and appends the user's free text after it.
pub fn generate_custom(
    template: &MonthTemplate,
    event_title: &str,
    event_date: Option<NaiveDate>,
    custom_text: &str,
) -> String {
    let mut comment = generate(template, event_title, event_date);
    if !custom_text.is_empty() {
        comment.push_str(&format!("\n\n{}", custom_text));
    }
    comment
}
