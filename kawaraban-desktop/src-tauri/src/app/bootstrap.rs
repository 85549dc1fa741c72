use std::sync::Arc;

use anyhow::{Result, anyhow};
use tauri::AppHandle;

use kawaraban_application::{ExportService, NewsletterUseCase, ShellCapability};
use kawaraban_infrastructure::{JsonSnapshotRepository, KawarabanPaths};

use crate::app::AppState;
use crate::shell::TauriShell;

pub struct AppBootstrap {
    pub app_state: AppState,
}

/// Wires the repository, use case, and export service, and restores the
/// persisted session (if any, and younger than 24 hours).
pub async fn bootstrap(handle: AppHandle) -> Result<AppBootstrap> {
    let snapshot_path = KawarabanPaths::snapshot_file()
        .map_err(|e| anyhow!("Failed to resolve snapshot path: {}", e))?;
    tracing::info!("[Bootstrap] snapshot file: {:?}", snapshot_path);

    let snapshot_repository = Arc::new(JsonSnapshotRepository::new(snapshot_path));
    let usecase = Arc::new(NewsletterUseCase::new(snapshot_repository));

    match usecase.restore_persisted().await {
        Ok(true) => tracing::info!("[Bootstrap] restored previous session"),
        Ok(false) => tracing::info!("[Bootstrap] starting with a fresh session"),
        // A broken snapshot must not block startup; the session simply
        // starts fresh.
        Err(err) => tracing::warn!("[Bootstrap] failed to restore session: {}", err),
    }

    let shell: Arc<dyn ShellCapability> = Arc::new(TauriShell::new(handle));
    let export_service = Arc::new(ExportService::new(Some(shell)));

    Ok(AppBootstrap {
        app_state: AppState {
            usecase,
            export_service,
        },
    })
}
