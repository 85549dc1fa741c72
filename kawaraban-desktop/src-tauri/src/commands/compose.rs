//! Page composition command.

use tauri::State;

use kawaraban_core::page::PageDescription;

use crate::app::AppState;

/// Composes the page description for the preview pane. The frontend
/// renders it and, for export, rasterizes the rendered page to PDF.
#[tauri::command]
pub async fn compose_preview(state: State<'_, AppState>) -> Result<PageDescription, String> {
    state
        .usecase
        .compose_preview()
        .await
        .map_err(|e| e.to_string())
}
