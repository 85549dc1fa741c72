use std::sync::Arc;

use kawaraban_application::{ExportService, NewsletterUseCase};

/// Application state shared across Tauri commands.
pub struct AppState {
    pub usecase: Arc<NewsletterUseCase>,
    pub export_service: Arc<ExportService>,
}
