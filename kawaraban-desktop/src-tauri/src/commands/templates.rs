//! Read-only table commands for the UI pickers.

use kawaraban_core::layout::{self, LayoutDefinition};
use kawaraban_core::template::{self, MonthTemplate};

/// All twelve month templates, in month order.
#[tauri::command]
pub fn list_month_templates() -> Vec<MonthTemplate> {
    template::all_templates().cloned().collect()
}

/// All layouts, in table order.
#[tauri::command]
pub fn list_layouts() -> Vec<LayoutDefinition> {
    layout::all_layouts().cloned().collect()
}
