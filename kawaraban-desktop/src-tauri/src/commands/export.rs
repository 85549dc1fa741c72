//! PDF export commands.
//!
//! The frontend rasterizes the preview to a single A4 PDF and sends the
//! bytes here as base64; this side owns the save dialog and the file
//! write.

use std::path::PathBuf;

use tauri::State;

use kawaraban_application::ExportOutcome;

use crate::app::AppState;

/// Exports a finished PDF: native save dialog, then write. The filename
/// offered in the dialog is `"<eventTitle-or-'newsletter'>_<YYYYMMDD>.pdf"`
/// stamped with today's date.
#[tauri::command]
pub async fn export_pdf(
    base64_data: String,
    state: State<'_, AppState>,
) -> Result<ExportOutcome, String> {
    let session = state.usecase.session().await;
    state
        .export_service
        .export_pdf(&session.event_title, &base64_data)
        .await
        .map_err(|e| e.to_string())
}

/// Opens a previously exported PDF with the OS default viewer.
#[tauri::command]
pub async fn open_exported_file(path: String, state: State<'_, AppState>) -> Result<(), String> {
    state
        .export_service
        .open_exported(&PathBuf::from(path))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_app_version(state: State<'_, AppState>) -> Result<String, String> {
    Ok(state
        .export_service
        .app_version()
        .unwrap_or_else(|| "unknown".to_string()))
}
