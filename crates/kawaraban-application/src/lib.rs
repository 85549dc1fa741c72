pub mod export;
pub mod newsletter_usecase;

pub use export::{ExportOutcome, ExportService, ShellCapability, export_filename};
pub use newsletter_usecase::NewsletterUseCase;
