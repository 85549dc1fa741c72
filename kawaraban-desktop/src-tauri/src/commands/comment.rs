//! Comment generation commands.

use tauri::State;

use crate::app::AppState;

/// Generates a comment from the selected month's template and stores it
/// as the session comment. Returns the "not selected" placeholder when
/// no month is chosen.
#[tauri::command]
pub async fn generate_comment(state: State<'_, AppState>) -> Result<String, String> {
    state
        .usecase
        .generate_comment()
        .await
        .map_err(|e| e.to_string())
}

/// Generates `count` candidates for the user to pick from; the session
/// comment is left untouched.
#[tauri::command]
pub async fn generate_comment_batch(
    count: usize,
    state: State<'_, AppState>,
) -> Result<Vec<String>, String> {
    state
        .usecase
        .generate_comment_batch(count)
        .await
        .map_err(|e| e.to_string())
}
