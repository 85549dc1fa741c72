//! Tauri implementation of the shell capability.
//!
//! This is the desktop side of the export contract: native save dialog,
//! PDF buffer write, and opening the result with the OS viewer. The
//! application layer only sees the `ShellCapability` trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use tauri::AppHandle;
use tauri_plugin_dialog::DialogExt;

use kawaraban_application::ShellCapability;
use kawaraban_core::error::{KawarabanError, Result};

pub struct TauriShell {
    app: AppHandle,
}

impl TauriShell {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

#[async_trait]
impl ShellCapability for TauriShell {
    async fn show_save_dialog(&self, default_filename: &str) -> Result<Option<PathBuf>> {
        let (tx, rx) = tokio::sync::oneshot::channel();
        self.app
            .dialog()
            .file()
            .set_title("PDFを保存")
            .set_file_name(default_filename)
            .add_filter("PDF ファイル", &["pdf"])
            .save_file(move |file_path| {
                let _ = tx.send(file_path);
            });

        let picked = rx
            .await
            .map_err(|e| KawarabanError::internal(format!("save dialog closed: {}", e)))?;
        match picked {
            Some(file_path) => {
                let path = file_path
                    .into_path()
                    .map_err(|e| KawarabanError::internal(format!("invalid save path: {}", e)))?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    async fn save_pdf_buffer(&self, path: &Path, base64_data: &str) -> Result<()> {
        let bytes = STANDARD
            .decode(base64_data)
            .map_err(|e| KawarabanError::internal(format!("invalid pdf payload: {}", e)))?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    async fn open_file(&self, path: &Path) -> Result<()> {
        tauri_plugin_opener::open_path(path, None::<&str>)
            .map_err(|e| KawarabanError::io(format!("failed to open {}: {}", path.display(), e)))
    }

    fn app_version(&self) -> String {
        self.app.package_info().version.to_string()
    }
}
