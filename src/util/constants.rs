// Dropspot - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Dropspot";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Dropspot";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Simulated upload progress
// =============================================================================

/// Default interval between progress ticks (ms).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Minimum user-configurable tick interval (ms).
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum user-configurable tick interval (ms).
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

/// Percentage points added to the progress counter per tick.
pub const PROGRESS_STEP: u8 = 2;

/// Progress value at which the upload completes. Progress never exceeds this.
pub const PROGRESS_COMPLETE: u8 = 100;

/// How often the ticker thread checks its cancel flag within each tick
/// sleep (ms). Keeps stop requests prompt without busy-waiting.
pub const TICKER_CANCEL_CHECK_INTERVAL_MS: u64 = 10;

// =============================================================================
// Accepted media
// =============================================================================

/// Declared media types must start with this prefix to be accepted.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Default maximum accepted file size in bytes (the advertised 10 MB limit).
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Minimum user-configurable size cap.
pub const MIN_MAX_IMAGE_BYTES: u64 = 1024; // 1 KB

/// Maximum user-configurable size cap.
pub const MAX_MAX_IMAGE_BYTES: u64 = 100 * 1024 * 1024; // 100 MB

/// Extensions offered by the native file-dialog filter. The filter is a
/// convenience only; the accept guard is the declared media type.
pub const IMAGE_DIALOG_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

// =============================================================================
// Preview reading
// =============================================================================

/// Retry limits for transient I/O errors while reading the selected file.
pub const READ_MAX_RETRIES: u32 = 3;
pub const READ_RETRY_DELAYS_MS: [u64; 3] = [50, 100, 200];

// =============================================================================
// UI polling
// =============================================================================

/// Repaint cadence (ms) while background activity is in flight, so tick and
/// preview messages are drained promptly even when the user is idle.
pub const UI_POLL_REPAINT_MS: u64 = 16;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
