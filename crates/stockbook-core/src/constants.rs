//! Fixed business rules and UI copy

// =============================================================================
// Stock
// =============================================================================

/// Stock at or below this (but above zero) is flagged LOW
pub const LOW_STOCK_THRESHOLD: f64 = 5.0;

// =============================================================================
// Dashboard
// =============================================================================

/// Rows shown per leaderboard
pub const LEADERBOARD_SIZE: usize = 10;

// =============================================================================
// Notices
// =============================================================================

/// How long a notice stays on screen
pub const NOTICE_DURATION_MS: u32 = 4_000;

pub const SUBMIT_OK_MESSAGE: &str = "✅ Transaction Logged Successfully!";
pub const SUBMIT_FAILED_MESSAGE: &str = "Error logging transaction.";
pub const SYNC_FAILED_MESSAGE: &str = "Sync failed. Check API URL and Permissions.";

// =============================================================================
// Form copy
// =============================================================================

/// Category literal written for expense rows
pub const EXPENSE_CATEGORY: &str = "Expense";

pub const CATEGORY_PROMPT: &str = "-- Select Category --";
pub const CATEGORY_LOADING: &str = "Loading categories...";
pub const CATEGORY_EMPTY: &str = "No Categories Found";
pub const PRODUCT_PROMPT: &str = "-- Select Item --";

pub const PRODUCT_LABEL: &str = "Product / Item";
pub const REASON_LABEL: &str = "Reason for Expense";
pub const QTY_LABEL: &str = "Quantity";
pub const AMOUNT_LABEL: &str = "Amount";

pub const SUBMIT_IDLE_LABEL: &str = "Log Transaction";
pub const SUBMIT_BUSY_LABEL: &str = "Processing...";
