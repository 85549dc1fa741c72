//! PDF export orchestration.
//!
//! The rasterizer lives in the frontend; it hands the finished PDF
//! bytes (base64) to this service, which drives the desktop shell's
//! save dialog and file write. In a pure browser context there is no
//! shell capability, and export falls back to a direct client-side
//! download under the same generated filename.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use kawaraban_core::error::Result;

/// Basename used when the event title is empty.
pub const FALLBACK_BASENAME: &str = "newsletter";

/// Builds the export filename: `"<title-or-'newsletter'>_<YYYYMMDD>.pdf"`,
/// stamped with the export date (not the event date).
pub fn export_filename(event_title: &str, today: NaiveDate) -> String {
    let base = if event_title.is_empty() {
        FALLBACK_BASENAME
    } else {
        event_title
    };
    format!(
        "{}_{}{:02}{:02}.pdf",
        base,
        today.year(),
        today.month(),
        today.day()
    )
}

/// The desktop shell services the core consumes as an injected
/// capability. Implemented by the Tauri layer; absent in a pure
/// browser context.
#[async_trait]
pub trait ShellCapability: Send + Sync {
    /// Shows a native save dialog. `None` means the user cancelled.
    async fn show_save_dialog(&self, default_filename: &str) -> Result<Option<PathBuf>>;

    /// Decodes the base64 PDF data and writes it to `path`.
    async fn save_pdf_buffer(&self, path: &Path, base64_data: &str) -> Result<()>;

    /// Opens a file with the OS default application.
    async fn open_file(&self, path: &Path) -> Result<()>;

    /// The application version string.
    fn app_version(&self) -> String;
}

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ExportOutcome {
    /// The PDF was written to disk.
    Saved { path: PathBuf },
    /// The user cancelled the save dialog.
    Cancelled,
    /// No shell capability: the frontend should download the PDF
    /// itself under this filename.
    BrowserFallback { filename: String },
}

/// Drives PDF export through the shell capability, when present.
pub struct ExportService {
    shell: Option<Arc<dyn ShellCapability>>,
}

impl ExportService {
    pub fn new(shell: Option<Arc<dyn ShellCapability>>) -> Self {
        Self { shell }
    }

    /// Exports a finished PDF: dialog, then write. See [`ExportOutcome`].
    pub async fn export_pdf(&self, event_title: &str, base64_data: &str) -> Result<ExportOutcome> {
        let filename = export_filename(event_title, Local::now().date_naive());
        let Some(shell) = &self.shell else {
            return Ok(ExportOutcome::BrowserFallback { filename });
        };

        let Some(path) = shell.show_save_dialog(&filename).await? else {
            tracing::info!("pdf export cancelled by user");
            return Ok(ExportOutcome::Cancelled);
        };
        shell.save_pdf_buffer(&path, base64_data).await?;
        tracing::info!(path = %path.display(), "pdf exported");
        Ok(ExportOutcome::Saved { path })
    }

    /// Opens an exported PDF with the OS default viewer.
    pub async fn open_exported(&self, path: &Path) -> Result<()> {
        match &self.shell {
            Some(shell) => shell.open_file(path).await,
            None => Ok(()),
        }
    }

    /// The shell's application version, if a shell is present.
    pub fn app_version(&self) -> Option<String> {
        self.shell.as_ref().map(|shell| shell.app_version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kawaraban_core::error::KawarabanError;
    use std::sync::Mutex;

    #[test]
    fn test_export_filename_pattern() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
        assert_eq!(export_filename("ひな祭り", date), "ひな祭り_20260303.pdf");
        assert_eq!(export_filename("", date), "newsletter_20260303.pdf");
    }

    #[test]
    fn test_export_filename_zero_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
        assert_eq!(export_filename("", date), "newsletter_20261225.pdf");
    }

    struct FakeShell {
        dialog_result: Option<PathBuf>,
        saved: Mutex<Vec<(PathBuf, String)>>,
        fail_save: bool,
    }

    #[async_trait]
    impl ShellCapability for FakeShell {
        async fn show_save_dialog(&self, _default_filename: &str) -> Result<Option<PathBuf>> {
            Ok(self.dialog_result.clone())
        }

        async fn save_pdf_buffer(&self, path: &Path, base64_data: &str) -> Result<()> {
            if self.fail_save {
                return Err(KawarabanError::io("write failed"));
            }
            self.saved
                .lock()
                .unwrap()
                .push((path.to_path_buf(), base64_data.to_string()));
            Ok(())
        }

        async fn open_file(&self, _path: &Path) -> Result<()> {
            Ok(())
        }

        fn app_version(&self) -> String {
            "0.1.0".to_string()
        }
    }

    #[tokio::test]
    async fn test_export_saves_through_shell() {
        let shell = Arc::new(FakeShell {
            dialog_result: Some(PathBuf::from("/tmp/out.pdf")),
            saved: Mutex::new(Vec::new()),
            fail_save: false,
        });
        let service = ExportService::new(Some(shell.clone() as Arc<dyn ShellCapability>));

        let outcome = service.export_pdf("夏祭り", "cGRm").await.unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Saved {
                path: PathBuf::from("/tmp/out.pdf")
            }
        );
        let saved = shell.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].1, "cGRm");
    }

    #[tokio::test]
    async fn test_export_cancelled_dialog() {
        let shell = Arc::new(FakeShell {
            dialog_result: None,
            saved: Mutex::new(Vec::new()),
            fail_save: false,
        });
        let service = ExportService::new(Some(shell.clone() as Arc<dyn ShellCapability>));

        let outcome = service.export_pdf("", "cGRm").await.unwrap();
        assert_eq!(outcome, ExportOutcome::Cancelled);
        assert!(shell.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_export_without_shell_falls_back() {
        let service = ExportService::new(None);
        let outcome = service.export_pdf("", "cGRm").await.unwrap();
        match outcome {
            ExportOutcome::BrowserFallback { filename } => {
                assert!(filename.starts_with("newsletter_"));
                assert!(filename.ends_with(".pdf"));
            }
            other => panic!("expected browser fallback, got {:?}", other),
        }
        assert!(service.app_version().is_none());
    }

    #[tokio::test]
    async fn test_export_save_failure_propagates() {
        let shell = Arc::new(FakeShell {
            dialog_result: Some(PathBuf::from("/tmp/out.pdf")),
            saved: Mutex::new(Vec::new()),
            fail_save: true,
        });
        let service = ExportService::new(Some(shell as Arc<dyn ShellCapability>));
        assert!(service.export_pdf("", "cGRm").await.is_err());
    }
}
