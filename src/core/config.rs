//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.gallery/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::client::{DEFAULT_API_BASE_URL, DEFAULT_ARTISTS_LIMIT, DEFAULT_ARTWORKS_LIMIT};
use crate::api::images::{DEFAULT_IMAGE_BASE_URL, DEFAULT_WEBSITE_URL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub discard_stale_responses: Option<bool>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub image_base_url: Option<String>,
    pub website_url: Option<String>,
    pub artworks_limit: Option<u32>,
    pub artists_limit: Option<u32>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub artworks_limit: Option<u32>,
    pub artists_limit: Option<u32>,
    pub discard_stale: bool,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "gallery.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub image_base_url: String,
    pub website_url: String,
    pub artworks_limit: u32,
    pub artists_limit: u32,
    pub discard_stale_responses: bool,
    pub log_file: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&GalleryConfig::default(), &CliOverrides::default())
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.gallery/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gallery").join("config.toml"))
}

/// Where the config came from. Loading happens before the logger exists,
/// so the outcome is kept and reported by [`ConfigSource::log`] later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Generated(PathBuf),
    GenerateFailed { path: PathBuf, reason: String },
    NoHome,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed { path, reason } => {
                warn!("Failed to write default config to {}: {}", path.display(), reason)
            }
            ConfigSource::NoHome => warn!("Could not determine home directory, using default config"),
        }
    }
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: GalleryConfig,
    pub source: ConfigSource,
}

/// Load config from `~/.gallery/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GalleryConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(LoadedConfig {
            config: GalleryConfig::default(),
            source: ConfigSource::NoHome,
        }),
    }
}

pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        let source = match generate_default_config(path) {
            Ok(()) => ConfigSource::Generated(path.to_path_buf()),
            Err(e) => ConfigSource::GenerateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        };
        return Ok(LoadedConfig {
            config: GalleryConfig::default(),
            source,
        });
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GalleryConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path.to_path_buf()),
    })
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Gallery Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://api.artic.edu/api/v1"     # Or set GALLERY_API_BASE_URL
# image_base_url = "https://www.artic.edu/iiif/2" # Or set GALLERY_IMAGE_BASE_URL
# website_url = "https://www.artic.edu"         # Or set GALLERY_WEBSITE_URL
# artworks_limit = 10
# artists_limit = 15

# [general]
# discard_stale_responses = false   # Ignore responses overtaken by a newer request
# log_file = "gallery.log"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GalleryConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &GalleryConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // API base URL: CLI → env → config → default
    let api_base_url = cli
        .base_url
        .clone()
        .or_else(|| env("GALLERY_API_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    // Image server: env → config → default
    let image_base_url = env("GALLERY_IMAGE_BASE_URL")
        .or_else(|| config.api.image_base_url.clone())
        .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string());

    let website_url = env("GALLERY_WEBSITE_URL")
        .or_else(|| config.api.website_url.clone())
        .unwrap_or_else(|| DEFAULT_WEBSITE_URL.to_string());

    // Limits: CLI → config → default. Zero would ask the API for nothing.
    let artworks_limit = cli
        .artworks_limit
        .or(config.api.artworks_limit)
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_ARTWORKS_LIMIT);
    let artists_limit = cli
        .artists_limit
        .or(config.api.artists_limit)
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_ARTISTS_LIMIT);

    // The CLI flag can only switch discarding on
    let discard_stale_responses =
        cli.discard_stale || config.general.discard_stale_responses.unwrap_or(false);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        api_base_url,
        image_base_url,
        website_url,
        artworks_limit,
        artists_limit,
        discard_stale_responses,
        log_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = GalleryConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.general.discard_stale_responses.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&GalleryConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.image_base_url, DEFAULT_IMAGE_BASE_URL);
        assert_eq!(resolved.website_url, DEFAULT_WEBSITE_URL);
        assert_eq!(resolved.artworks_limit, 10);
        assert_eq!(resolved.artists_limit, 15);
        assert!(!resolved.discard_stale_responses);
        assert_eq!(resolved.log_file, "gallery.log");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GalleryConfig {
            api: ApiConfig {
                base_url: Some("http://localhost:9000/api/v1".to_string()),
                artworks_limit: Some(25),
                ..Default::default()
            },
            general: GeneralConfig {
                discard_stale_responses: Some(true),
                log_file: Some("/tmp/gallery.log".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.api_base_url, "http://localhost:9000/api/v1");
        assert_eq!(resolved.artworks_limit, 25);
        assert_eq!(resolved.artists_limit, 15);
        assert!(resolved.discard_stale_responses);
        assert_eq!(resolved.log_file, "/tmp/gallery.log");
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = GalleryConfig {
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
                image_base_url: Some("http://images-from-config".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "GALLERY_API_BASE_URL" => Some("http://from-env".to_string()),
            "GALLERY_IMAGE_BASE_URL" => Some("http://images-from-env".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.api_base_url, "http://from-env");
        assert_eq!(resolved.image_base_url, "http://images-from-env");

        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.api_base_url, "http://from-cli");
    }

    #[test]
    fn test_zero_limits_fall_back_to_defaults() {
        let cli = CliOverrides {
            artworks_limit: Some(0),
            artists_limit: Some(3),
            ..Default::default()
        };
        let resolved = resolve_with_env(&GalleryConfig::default(), &cli, no_env);
        assert_eq!(resolved.artworks_limit, 10);
        assert_eq!(resolved.artists_limit, 3);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
discard_stale_responses = true
log_file = "art.log"

[api]
base_url = "https://api.artic.edu/api/v1"
image_base_url = "https://www.artic.edu/iiif/2"
artworks_limit = 12
artists_limit = 4
"#;
        let config: GalleryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.discard_stale_responses, Some(true));
        assert_eq!(config.general.log_file.as_deref(), Some("art.log"));
        assert_eq!(config.api.artworks_limit, Some(12));
        assert_eq!(config.api.artists_limit, Some(4));
        assert!(config.api.website_url.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[api]
artists_limit = 30
"#;
        let config: GalleryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.artists_limit, Some(30));
        assert!(config.api.base_url.is_none());
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("gallery-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let loaded = load_config_from(&path).unwrap();
        assert!(loaded.config.api.base_url.is_none());
        assert_eq!(loaded.source, ConfigSource::Generated(path.clone()));

        // The generated file is all comments, so it parses back to defaults
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [api]"));
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.config.api.artworks_limit.is_none());
        assert_eq!(reparsed.source, ConfigSource::File(path.clone()));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_default_is_reported_not_fatal() {
        let dir = std::env::temp_dir().join(format!("gallery-config-blocked-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        // A regular file where the config directory should be
        let blocker = dir.join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let loaded = load_config_from(&path).unwrap();
        assert!(loaded.config.api.base_url.is_none());
        assert!(matches!(loaded.source, ConfigSource::GenerateFailed { .. }));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = std::env::temp_dir().join(format!("gallery-config-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
