//! Photo list commands.
//!
//! Photos arrive already decoded by the frontend file reader (data
//! URIs); decode completion order across simultaneously dropped files
//! is not guaranteed, so each file is added as its decode finishes.

use tauri::State;

use kawaraban_core::session::{AddPhotosOutcome, Photo, SessionState};

use crate::app::AppState;

/// Adds photos up to the remaining capacity. `dropped > 0` in the
/// outcome means the UI should warn that the excess was discarded.
#[tauri::command]
pub async fn add_photos(
    photos: Vec<Photo>,
    state: State<'_, AppState>,
) -> Result<AddPhotosOutcome, String> {
    state
        .usecase
        .add_photos(photos)
        .await
        .map_err(|e| e.to_string())
}

/// Removes the photo at `index` (insertion order).
#[tauri::command]
pub async fn remove_photo(
    index: usize,
    state: State<'_, AppState>,
) -> Result<SessionState, String> {
    state
        .usecase
        .remove_photo(index)
        .await
        .map_err(|e| e.to_string())
}
