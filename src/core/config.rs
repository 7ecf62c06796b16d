//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.scriptgen/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScriptgenConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub samples: SamplesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SamplesConfig {
    pub prompts: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILE: &str = "scriptgen.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Empty means "use the built-in catalog".
    pub samples: Vec<String>,
    /// Level strings that failed to parse, in precedence order
    pub ignored_levels: Vec<String>,
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub log_level: Option<String>,
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

/// Where the file layer came from.
///
/// Loading runs before the logger exists (the log file and level are config
/// values), so the outcome is returned and reported by [`log_startup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Loaded(PathBuf),
    /// No file existed; a commented-out default was written here.
    Generated(PathBuf),
    /// Defaults only, with the reason no file was read or written.
    Defaults(String),
}

/// Returns the path to `~/.scriptgen/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".scriptgen").join("config.toml"))
}

/// Load config from `~/.scriptgen/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ScriptgenConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<(ScriptgenConfig, ConfigSource), ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok((
            ScriptgenConfig::default(),
            ConfigSource::Defaults("could not determine home directory".to_string()),
        )),
    }
}

pub fn load_config_from(path: &Path) -> Result<(ScriptgenConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        let source = match generate_default_config(path) {
            Ok(()) => ConfigSource::Generated(path.to_path_buf()),
            Err(e) => ConfigSource::Defaults(format!(
                "failed to write default config at {}: {e}",
                path.display()
            )),
        };
        return Ok((ScriptgenConfig::default(), source));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ScriptgenConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok((config, ConfigSource::Loaded(path.to_path_buf())))
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# scriptgen configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [service]
# base_url = "http://localhost:8000"   # Or set SCRIPTGEN_BASE_URL env var

# [logging]
# level = "debug"                      # "off", "error", "warn", "info", "debug", "trace"
# file = "scriptgen.log"

# [samples]
# prompts = [
#     "Write a romantic comedy about two rival chefs.",
#     "Create a thriller about a missing artifact.",
# ]
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
pub fn resolve(config: &ScriptgenConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("SCRIPTGEN_BASE_URL").ok())
        .or_else(|| config.service.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Log level: CLI → env → config → default; unparseable values fall through
    let mut ignored_levels = Vec::new();
    let log_level = [
        cli.log_level.clone(),
        std::env::var("SCRIPTGEN_LOG_LEVEL").ok(),
        config.logging.level.clone(),
    ]
    .into_iter()
    .flatten()
    .find_map(|raw| {
        let level = parse_level(&raw);
        if level.is_none() {
            ignored_levels.push(raw);
        }
        level
    })
    .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Blank entries are dropped; they could never be submitted anyway
    let samples = config
        .samples
        .prompts
        .as_ref()
        .map(|prompts| {
            prompts
                .iter()
                .filter(|p| !p.trim().is_empty())
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    ResolvedConfig {
        base_url,
        log_level,
        log_file,
        samples,
        ignored_levels,
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.parse::<LevelFilter>().ok()
}

/// Reports how the config was assembled. Call once the logger is installed.
pub fn log_startup(source: &ConfigSource, config: &ScriptgenConfig, resolved: &ResolvedConfig) {
    match source {
        ConfigSource::Loaded(path) => info!("Loaded config from {}", path.display()),
        ConfigSource::Generated(path) => {
            info!("No config file found, generated default at {}", path.display())
        }
        ConfigSource::Defaults(reason) => warn!("Using default config: {}", reason),
    }
    debug!("Config: {:?}", config);
    for raw in &resolved.ignored_levels {
        warn!("Ignoring unknown log level '{}'", raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ScriptgenConfig::default();
        assert!(config.service.base_url.is_none());
        assert!(config.samples.prompts.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ScriptgenConfig {
            logging: LoggingConfig {
                level: Some("warn".to_string()),
                file: Some("/tmp/sg.log".to_string()),
            },
            samples: SamplesConfig {
                prompts: Some(vec!["A heist.".to_string(), "   ".to_string()]),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/sg.log"));
        assert_eq!(resolved.samples, vec!["A heist.".to_string()]);
    }

    #[test]
    fn test_resolve_cli_url_wins() {
        let config = ScriptgenConfig {
            service: ServiceConfig {
                base_url: Some("http://config:1".to_string()),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            base_url: Some("http://cli:2".to_string()),
            log_level: Some("trace".to_string()),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.base_url, "http://cli:2");
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_bad_cli_level_falls_through() {
        let config = ScriptgenConfig {
            logging: LoggingConfig {
                level: Some("error".to_string()),
                file: None,
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            base_url: None,
            log_level: Some("loud".to_string()),
        };
        // Env may or may not be set on the test host; only assert when it isn't
        if std::env::var("SCRIPTGEN_LOG_LEVEL").is_err() {
            let resolved = resolve(&config, &cli);
            assert_eq!(resolved.log_level, LevelFilter::Error);
            assert_eq!(resolved.ignored_levels, vec!["loud".to_string()]);
        }
    }

    #[test]
    fn test_existing_file_reports_loaded_source() {
        let dir = std::env::temp_dir().join(format!("scriptgen-src-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();

        let (config, source) = load_config_from(&path).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("info"));
        assert_eq!(source, ConfigSource::Loaded(path.clone()));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_default_reports_reason() {
        // A regular file as the parent directory makes create_dir_all fail
        let blocker = std::env::temp_dir().join(format!("scriptgen-blk-{}", std::process::id()));
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let (config, source) = load_config_from(&path).unwrap();
        assert!(config.service.base_url.is_none());
        assert!(matches!(source, ConfigSource::Defaults(ref reason) if reason.contains("failed to write")));
        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[service]
base_url = "http://192.168.1.20:8000"

[logging]
level = "info"

[samples]
prompts = ["A western on a train.", "A mystery at sea."]
"#;
        let config: ScriptgenConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.service.base_url.as_deref(),
            Some("http://192.168.1.20:8000")
        );
        assert_eq!(config.logging.level.as_deref(), Some("info"));
        assert_eq!(config.samples.prompts.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[logging]
file = "other.log"
"#;
        let config: ScriptgenConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.file.as_deref(), Some("other.log"));
        assert!(config.logging.level.is_none());
        assert!(config.service.base_url.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("scriptgen-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[service\nbase_url = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("scriptgen-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let (config, source) = load_config_from(&path).unwrap();
        assert!(config.service.base_url.is_none());
        assert_eq!(source, ConfigSource::Generated(path.clone()));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [service]"));
        // The generated file is all comments, so it parses back to defaults
        let reparsed: ScriptgenConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.samples.prompts.is_none());
        let _ = fs::remove_dir_all(&dir);
    }
}
