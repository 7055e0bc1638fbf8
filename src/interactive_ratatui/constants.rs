//! Constants for the admin console
//!
//! Timing values and layout sizes used across the TUI.

// Timing constants
/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// How long the create form's submit stays disabled after a successful save
pub const SAVED_DISPLAY_WINDOW_MS: u64 = 2000;

/// Delay before the edit/delete modal closes after success
pub const MODAL_CLOSE_DELAY_MS: u64 = 2000;

/// Lifetime of a success toast
pub const SUCCESS_TOAST_DURATION_MS: u64 = 2000;

/// Lifetime of an error toast
pub const ERROR_TOAST_DURATION_MS: u64 = 4000;

/// Toasts kept on screen at once
pub const MAX_VISIBLE_TOASTS: usize = 5;

// Notification texts
pub const MSG_SAVING: &str = "Saving data...";
pub const MSG_SAVED: &str = "Data saved successfully!";
pub const MSG_SAVE_FAILED: &str = "Error saving data";
pub const MSG_UPDATING: &str = "Updating data...";
pub const MSG_UPDATED: &str = "Data updated successfully";
pub const MSG_UPDATE_FAILED: &str = "Failed to update data";
pub const MSG_DELETING: &str = "Deleting data...";
pub const MSG_DELETED: &str = "Data deleted successfully";
pub const MSG_DELETE_FAILED: &str = "Failed to delete data";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch data";
pub const MSG_INVALID_ID: &str = "Invalid item ID";
pub const MSG_EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

// UI Layout constants
/// Maximum width for help and confirmation dialogs
pub const DIALOG_MAX_WIDTH: u16 = 80;

/// Minimum margin around dialogs
pub const DIALOG_MARGIN: u16 = 4;

/// Edit modal size as a percentage of the screen
pub const EDIT_MODAL_PERCENT: u16 = 90;

/// Width of the toast column
pub const TOAST_WIDTH: u16 = 44;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

/// Column widths of the manage table (percent): four summary columns and actions
pub const TABLE_COLUMN_PERCENTS: [u16; 5] = [28, 20, 16, 16, 20];
