use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use weeboo_core::DEFAULT_BASE_URL;

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub api: Option<ApiConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
}

/// Platform config directory path: `<config_dir>/weeboo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("weeboo").join("config.toml"))
}

/// Load config by cascading CWD `.weeboo.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".weeboo.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base_api = base.api.unwrap_or_default();
    let overlay_api = overlay.api.unwrap_or_default();
    let base_display = base.display.unwrap_or_default();
    let overlay_display = overlay.display.unwrap_or_default();

    ConfigFile {
        api: Some(ApiConfig {
            base_url: overlay_api.base_url.or(base_api.base_url),
            timeout_secs: overlay_api.timeout_secs.or(base_api.timeout_secs),
        }),
        display: Some(DisplayConfig {
            theme: overlay_display.theme.or(base_display.theme),
        }),
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub theme: Option<String>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub theme: String,
}

/// Resolve settings: overrides > config file > defaults.
pub fn resolve(overrides: Overrides, file: ConfigFile) -> Settings {
    let api = file.api.unwrap_or_default();
    let display = file.display.unwrap_or_default();

    Settings {
        base_url: overrides
            .base_url
            .or(api.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        timeout: overrides
            .timeout_secs
            .or(api.timeout_secs)
            .map(Duration::from_secs),
        theme: overrides
            .theme
            .or(display.theme)
            .unwrap_or_else(|| "modern".to_string()),
    }
}
