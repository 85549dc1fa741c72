pub mod comment;
pub mod compose;
pub mod error;
pub mod history;
pub mod layout;
pub mod materials;
pub mod page;
pub mod session;
pub mod snapshot;
pub mod template;

// Re-export common error type
pub use error::KawarabanError;
