//! Month template table: the static per-month theme records.

pub mod model;
pub mod table;

pub use model::{ColorScheme, MonthTemplate};
pub use table::{all_templates, current_year, lookup};
