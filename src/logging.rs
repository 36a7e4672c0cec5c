//! Structured logging setup.
//!
//! The library itself only emits `tracing` events. Applications embedding it
//! call [`init`] once to get a formatted subscriber; `RUST_LOG` overrides the
//! configured level.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, e.g. `"info"` or `"labgrid=debug"`.
    pub level: String,
    /// Include the event target (module path) in each line.
    pub with_target: bool,
    /// Use ANSI colours.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: true,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Builds the env filter: `RUST_LOG` when set, otherwise `level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Installs a global fmt subscriber.
///
/// Returns false when a global subscriber was already installed, which keeps
/// repeated calls (tests, embedding applications) harmless.
pub fn init(config: &LogConfig) -> bool {
    fmt()
        .with_env_filter(config.env_filter())
        .with_target(config.with_target)
        .with_ansi(config.ansi)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let c = LogConfig::default();
        assert_eq!(c.level, "info");
        assert!(c.with_target);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let c = LogConfig {
            level: "debug".into(),
            with_target: false,
            ansi: false,
        };
        init(&c);
        // Whatever the first call did, a subscriber is now installed.
        assert!(!init(&c));
    }
}
