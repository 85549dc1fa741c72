//! Layout table: the named page structures a newsletter can use.

pub mod model;
pub mod table;

pub use model::{LayoutDefinition, SectionKind, SectionSpec};
pub use table::{DEFAULT_LAYOUT_ID, all_layouts, lookup, lookup_or_default};
