//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

/// Rows per page for every collection. Fixed, not configurable.
pub const PAGE_SIZE: usize = 10;

/// Products with fewer units than this are reported as low on stock
pub const LOW_STOCK_THRESHOLD: u32 = 15;

/// Rating given to newly created products
pub const DEFAULT_PRODUCT_RATING: f32 = 4.0;

/// Number of upcoming calendar events shown on the dashboard
pub const UPCOMING_EVENTS_LIMIT: usize = 5;

/// Maximum number of entries kept by the in-memory log buffer
pub const LOG_BUFFER_CAPACITY: usize = 1000;

/// Seconds a status-line toast stays visible
pub const TOAST_SECONDS: u64 = 4;

// Success Messages
pub const SUCCESS_CREATED: &str = "✅ {} created";
pub const SUCCESS_UPDATED: &str = "✅ {} updated";
pub const SUCCESS_DELETED: &str = "✅ {} deleted";
pub const SUCCESS_EXPORTED: &str = "✅ Exported {} records to {}";
pub const SUCCESS_TASK_MOVED: &str = "✅ Task moved to {}";
pub const SUCCESS_ALL_READ: &str = "✅ All notifications marked as read";
pub const SUCCESS_CLEARED: &str = "✅ All notifications cleared";

// Error Messages
pub const ERROR_FIX_FIELDS: &str = "❌ Please fix the highlighted fields";
pub const ERROR_NOTHING_SELECTED: &str = "❌ Nothing selected";
pub const ERROR_EXPORT_FAILED: &str = "❌ Export failed";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;

/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 40;

/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 22;

/// Default file name for configuration in the working directory
pub const CONFIG_FILE_NAME: &str = "admindash.toml";

/// Directory name used under the platform config and data directories
pub const APP_DIR_NAME: &str = "admindash";

/// Substitute the `{}` placeholders of a message template, left to right
pub fn fill(template: &str, values: &[&str]) -> String {
    values
        .iter()
        .fold(template.to_string(), |message, value| message.replacen("{}", value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_in_order() {
        assert_eq!(fill(SUCCESS_CREATED, &["User"]), "✅ User created");
        assert_eq!(fill(SUCCESS_EXPORTED, &["3", "out.json"]), "✅ Exported 3 records to out.json");
        assert_eq!(fill(SUCCESS_EXPORTED, &["3"]), "✅ Exported 3 records to {}");
    }
}
