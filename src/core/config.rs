//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.rootnav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fmt;
use std::fs::{self, File};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::OnboardingMode;
use crate::core::navigator::NavigatorOptions;
use crate::core::transition::{SlideEdge, TransitionPolicy, TransitionStyle};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RootnavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigationConfig {
    pub transition_ms: Option<u64>,
    pub redeliver_deeplink_on_main: Option<bool>,
    pub login_style: Option<StyleKind>,
    pub onboarding_style: Option<StyleKind>,
    pub logout_style: Option<StyleKind>,
    pub main_style: Option<StyleKind>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    pub onboarding: Option<OnboardingMode>,
    pub deeplink: Option<String>,
}

/// A transition style as named in the config file; duration comes separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    Instant,
    Fade,
    Slide,
}

impl StyleKind {
    pub fn with_duration(self, duration: Duration) -> TransitionStyle {
        match self {
            StyleKind::Instant => TransitionStyle::Instant,
            StyleKind::Fade => TransitionStyle::Fade { duration },
            StyleKind::Slide => TransitionStyle::Slide {
                edge: SlideEdge::Left,
                duration,
            },
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TRANSITION_MS: u64 = 300;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub options: NavigatorOptions,
    pub onboarding: OnboardingMode,
    pub deeplink: Option<String>,
    pub log_level: LevelFilter,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub onboarding: Option<OnboardingMode>,
    pub transition_ms: Option<u64>,
    pub deeplink: Option<String>,
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

/// Returns the path to `~/.rootnav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".rootnav").join("config.toml"))
}

/// Load config from `~/.rootnav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RootnavConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RootnavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RootnavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RootnavConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: RootnavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# rootnav Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"

# [navigation]
# transition_ms = 300                # Duration of fade and slide transitions
# redeliver_deeplink_on_main = true  # Dispatch the deep link again once main appears
# login_style = "instant"            # "instant", "fade" or "slide"
# onboarding_style = "instant"
# logout_style = "slide"
# main_style = "fade"

# [demo]
# onboarding = "before"              # "before", "skip" or "unavailable"
# deeplink = '{"route":"inbox"}'     # Or set ROOTNAV_DEEPLINK env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RootnavConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Transition duration: CLI → env → config → default
    let transition_ms = cli
        .transition_ms
        .or_else(|| env_parse("ROOTNAV_TRANSITION_MS"))
        .or(config.navigation.transition_ms)
        .unwrap_or(DEFAULT_TRANSITION_MS);
    let duration = Duration::from_millis(transition_ms);

    let nav = &config.navigation;
    let transitions = TransitionPolicy {
        login: nav.login_style.unwrap_or(StyleKind::Instant).with_duration(duration),
        onboarding: nav
            .onboarding_style
            .unwrap_or(StyleKind::Instant)
            .with_duration(duration),
        logout: nav.logout_style.unwrap_or(StyleKind::Slide).with_duration(duration),
        main: nav.main_style.unwrap_or(StyleKind::Fade).with_duration(duration),
    };

    // Onboarding mode: CLI → env → config → default
    let onboarding = cli
        .onboarding
        .or_else(|| {
            std::env::var("ROOTNAV_ONBOARDING")
                .ok()
                .and_then(|s| parse_onboarding(&s))
        })
        .or(config.demo.onboarding)
        .unwrap_or_default();

    // Deep link: CLI → env → config
    let deeplink = cli
        .deeplink
        .clone()
        .or_else(|| std::env::var("ROOTNAV_DEEPLINK").ok())
        .or_else(|| config.demo.deeplink.clone());

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => LevelFilter::from_str(level).unwrap_or_else(|_| {
            warn!("Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}");
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        options: NavigatorOptions {
            transitions,
            redeliver_deeplink_on_main: nav.redeliver_deeplink_on_main.unwrap_or(true),
        },
        onboarding,
        deeplink,
        log_level,
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

fn parse_onboarding(raw: &str) -> Option<OnboardingMode> {
    use clap::ValueEnum;
    match OnboardingMode::from_str(raw.trim(), true) {
        Ok(mode) => Some(mode),
        Err(_) => {
            warn!("Ignoring ROOTNAV_ONBOARDING={raw:?}: expected before, skip or unavailable");
            None
        }
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Install the file logger at the default level. Called before the config is
/// loaded so warnings from loading and resolving reach the log.
pub fn init_file_logger(file: File) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    // Accept everything; the global max level does the filtering
    if WriteLogger::init(LevelFilter::Trace, log_config, file).is_ok() {
        log::set_max_level(DEFAULT_LOG_LEVEL);
    }
}

/// Switch to the level the resolved config asks for.
pub fn apply_log_level(level: LevelFilter) {
    log::set_max_level(level);
    debug!("Log level set to {level}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_installed_first_captures_resolve_warnings() {
        let path = std::env::temp_dir().join(format!("rootnav-{}.log", std::process::id()));
        init_file_logger(File::create(&path).unwrap());

        let config: RootnavConfig = toml::from_str("[general]\nlog_level = \"loud\"\n").unwrap();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);

        let written = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert!(written.contains("Unknown log level"));
    }

    #[test]
    fn test_default_config_parses() {
        let config = RootnavConfig::default();
        assert!(config.navigation.transition_ms.is_none());
        assert!(config.demo.deeplink.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = RootnavConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.options.transitions, TransitionPolicy::default());
        assert!(resolved.options.redeliver_deeplink_on_main);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = RootnavConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
            },
            navigation: NavigationConfig {
                transition_ms: Some(120),
                redeliver_deeplink_on_main: Some(false),
                main_style: Some(StyleKind::Slide),
                login_style: Some(StyleKind::Fade),
                ..Default::default()
            },
            demo: DemoConfig::default(),
        };
        let resolved = resolve(
            &config,
            &CliOverrides {
                transition_ms: Some(120),
                ..Default::default()
            },
        );
        let duration = Duration::from_millis(120);
        assert_eq!(
            resolved.options.transitions.main,
            TransitionStyle::Slide {
                edge: SlideEdge::Left,
                duration
            }
        );
        assert_eq!(resolved.options.transitions.login, TransitionStyle::Fade { duration });
        assert_eq!(resolved.options.transitions.onboarding, TransitionStyle::Instant);
        assert!(!resolved.options.redeliver_deeplink_on_main);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = RootnavConfig {
            demo: DemoConfig {
                onboarding: Some(OnboardingMode::Unavailable),
                deeplink: Some("from-config".to_string()),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            onboarding: Some(OnboardingMode::Skip),
            transition_ms: Some(50),
            deeplink: Some("from-cli".to_string()),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.onboarding, OnboardingMode::Skip);
        assert_eq!(resolved.deeplink.as_deref(), Some("from-cli"));
        assert_eq!(
            resolved.options.transitions.main,
            TransitionStyle::Fade {
                duration: Duration::from_millis(50)
            }
        );
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = RootnavConfig {
            general: GeneralConfig {
                log_level: Some("chatty".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
log_level = "info"

[navigation]
transition_ms = 250
redeliver_deeplink_on_main = false
logout_style = "fade"

[demo]
onboarding = "skip"
deeplink = '{"route":"inbox"}'
"#;
        let config: RootnavConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(config.navigation.transition_ms, Some(250));
        assert_eq!(config.navigation.logout_style, Some(StyleKind::Fade));
        assert_eq!(config.demo.onboarding, Some(OnboardingMode::Skip));
        assert_eq!(config.demo.deeplink.as_deref(), Some(r#"{"route":"inbox"}"#));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[navigation]
main_style = "instant"
"#;
        let config: RootnavConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.navigation.main_style, Some(StyleKind::Instant));
        assert!(config.navigation.transition_ms.is_none());
        assert!(config.demo.onboarding.is_none());
    }

    #[test]
    fn test_bad_style_is_parse_error() {
        let result: Result<RootnavConfig, _> =
            toml::from_str("[navigation]\nmain_style = \"spin\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_onboarding_ignores_case() {
        assert_eq!(parse_onboarding("Skip"), Some(OnboardingMode::Skip));
        assert_eq!(parse_onboarding("sideways"), None);
    }
}
