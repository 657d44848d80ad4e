// Dropspot - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Dropspot configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/dropspot/ or %APPDATA%\Dropspot\)
    pub config_dir: PathBuf,

    /// Data directory for caches etc.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[upload]` section.
    pub upload: UploadSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[upload]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UploadSection {
    /// Interval between simulated progress ticks (ms).
    pub tick_interval_ms: Option<u64>,
    /// Maximum accepted file size in bytes.
    pub max_image_bytes: Option<u64>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time.
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interval between simulated progress ticks (ms).
    pub tick_interval_ms: u64,
    /// Maximum accepted file size in bytes.
    pub max_image_bytes: u64,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Logging level string (consumed before tracing is initialised).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: constants::DEFAULT_TICK_INTERVAL_MS,
            max_image_bytes: constants::DEFAULT_MAX_IMAGE_BYTES,
            dark_mode: true,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no warnings
/// (first-run). If the file is unparseable, returns defaults with a warning
/// -- the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    // Validate each field against named constants, accumulating all warnings.
    let mut config = AppConfig::default();

    // -- Upload: tick_interval_ms --
    if let Some(interval) = raw.upload.tick_interval_ms {
        if (constants::MIN_TICK_INTERVAL_MS..=constants::MAX_TICK_INTERVAL_MS).contains(&interval)
        {
            config.tick_interval_ms = interval;
        } else {
            warnings.push(format!(
                "[upload] tick_interval_ms = {interval} is out of range ({}-{}). Using default ({}).",
                constants::MIN_TICK_INTERVAL_MS,
                constants::MAX_TICK_INTERVAL_MS,
                constants::DEFAULT_TICK_INTERVAL_MS,
            ));
        }
    }

    // -- Upload: max_image_bytes --
    if let Some(max) = raw.upload.max_image_bytes {
        if (constants::MIN_MAX_IMAGE_BYTES..=constants::MAX_MAX_IMAGE_BYTES).contains(&max) {
            config.max_image_bytes = max;
        } else {
            warnings.push(format!(
                "[upload] max_image_bytes = {max} is out of range ({}-{}). Using default ({}).",
                constants::MIN_MAX_IMAGE_BYTES,
                constants::MAX_MAX_IMAGE_BYTES,
                constants::DEFAULT_MAX_IMAGE_BYTES,
            ));
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) {
        std::fs::write(dir.join(constants::CONFIG_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.tick_interval_ms, constants::DEFAULT_TICK_INTERVAL_MS);
        assert_eq!(config.max_image_bytes, constants::DEFAULT_MAX_IMAGE_BYTES);
        assert!(config.dark_mode);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_valid_config_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
            [upload]
            tick_interval_ms = 100
            max_image_bytes = 2097152

            [ui]
            theme = "light"

            [logging]
            level = "debug"
            "#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.max_image_bytes, 2 * 1024 * 1024);
        assert!(!config.dark_mode);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back_with_warnings() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
            [upload]
            tick_interval_ms = 5
            max_image_bytes = 10
            "#,
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 2);
        assert_eq!(config.tick_interval_ms, constants::DEFAULT_TICK_INTERVAL_MS);
        assert_eq!(config.max_image_bytes, constants::DEFAULT_MAX_IMAGE_BYTES);
    }

    #[test]
    fn test_unparseable_config_falls_back_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "this is not toml [");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.tick_interval_ms, constants::DEFAULT_TICK_INTERVAL_MS);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
            [upload]
            future_option = true

            [brand_new_section]
            key = 1
            "#,
        );
        let (_, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_theme_warns() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[ui]\ntheme = \"solarized\"\n");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(config.dark_mode);
    }
}
