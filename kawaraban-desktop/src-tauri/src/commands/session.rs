//! Session mutation commands.
//!
//! Each command forwards to the use case and returns either the updated
//! session (for mutations the UI re-renders from) or a user-facing
//! error string.

use chrono::NaiveDate;
use tauri::State;

use kawaraban_core::session::{FontSizeOverride, SessionState};
use kawaraban_core::template::ColorScheme;

use crate::app::AppState;

/// Gets the current session snapshot (for initial load and re-renders).
#[tauri::command]
pub async fn get_session(state: State<'_, AppState>) -> Result<SessionState, String> {
    Ok(state.usecase.session().await)
}

#[tauri::command]
pub async fn select_month(
    month: u32,
    state: State<'_, AppState>,
) -> Result<SessionState, String> {
    state
        .usecase
        .select_month(month)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn select_layout(
    layout_id: String,
    state: State<'_, AppState>,
) -> Result<SessionState, String> {
    state
        .usecase
        .select_layout(&layout_id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn set_event_title(title: String, state: State<'_, AppState>) -> Result<(), String> {
    state
        .usecase
        .set_event_title(title)
        .await
        .map_err(|e| e.to_string())
}

/// Sets the event date from an `YYYY-MM-DD` string; `None` clears it.
#[tauri::command]
pub async fn set_event_date(
    date: Option<String>,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let parsed = match date.as_deref() {
        Some("") | None => None,
        Some(raw) => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|e| format!("Invalid date '{}': {}", raw, e))?,
        ),
    };
    state
        .usecase
        .set_event_date(parsed)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn set_comment(comment: String, state: State<'_, AppState>) -> Result<(), String> {
    state
        .usecase
        .set_comment(comment)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn set_section_title(
    layout_id: String,
    section_key: String,
    title: String,
    state: State<'_, AppState>,
) -> Result<(), String> {
    state
        .usecase
        .set_section_title(&layout_id, &section_key, title)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn set_color_override(
    colors: Option<ColorScheme>,
    state: State<'_, AppState>,
) -> Result<(), String> {
    state
        .usecase
        .set_color_override(colors)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn set_font_sizes(
    sizes: Option<FontSizeOverride>,
    state: State<'_, AppState>,
) -> Result<(), String> {
    state
        .usecase
        .set_font_sizes(sizes)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn clear_customization(state: State<'_, AppState>) -> Result<(), String> {
    state
        .usecase
        .clear_customization()
        .await
        .map_err(|e| e.to_string())
}

/// Restores the most recent undo snapshot; errors with a user-facing
/// message when there is nothing to undo.
#[tauri::command]
pub async fn undo(state: State<'_, AppState>) -> Result<SessionState, String> {
    state.usecase.undo().await.map_err(|e| e.to_string())
}
