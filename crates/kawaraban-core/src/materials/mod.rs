//! Decoration materials table: per-month page dressing.

pub mod model;
pub mod table;

pub use model::{BackgroundPattern, BorderStyle, MonthMaterials};
pub use table::{all_materials, lookup};
