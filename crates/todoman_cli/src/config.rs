//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve log level, log destination and debug messaging from `TODOMAN_*`
//!   variables, falling back to build-mode defaults.
//!
//! # Invariants
//! - Resolution never fails; validation of the values happens in `logging`.
//! - Blank variables are treated as unset.

use crate::logging::default_log_level;

pub const LOG_LEVEL_VAR: &str = "TODOMAN_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "TODOMAN_LOG_DIR";
pub const DEBUG_MESSAGES_VAR: &str = "TODOMAN_DEBUG_MESSAGES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// `None` logs to stderr.
    pub log_dir: Option<String>,
    pub debug_messages: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
            debug_messages: true,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            level: read(LOG_LEVEL_VAR).unwrap_or(defaults.level),
            log_dir: read(LOG_DIR_VAR),
            debug_messages: read(DEBUG_MESSAGES_VAR)
                .map(|value| !is_switched_off(&value))
                .unwrap_or(defaults.debug_messages),
        }
    }
}

fn is_switched_off(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::{LogConfig, DEBUG_MESSAGES_VAR, LOG_DIR_VAR, LOG_LEVEL_VAR};
    use crate::logging::default_log_level;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = LogConfig::from_lookup(lookup(&[]));
        assert_eq!(config.level, default_log_level());
        assert_eq!(config.log_dir, None);
        assert!(config.debug_messages);
    }

    #[test]
    fn variables_override_defaults() {
        let config = LogConfig::from_lookup(lookup(&[
            (LOG_LEVEL_VAR, " warn "),
            (LOG_DIR_VAR, "/var/log/todoman"),
            (DEBUG_MESSAGES_VAR, "OFF"),
        ]));
        assert_eq!(config.level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/todoman"));
        assert!(!config.debug_messages);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = LogConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "  "), (LOG_DIR_VAR, "")]));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn debug_messages_stay_on_for_other_values() {
        for value in ["1", "true", "yes", "verbose"] {
            let config = LogConfig::from_lookup(lookup(&[(DEBUG_MESSAGES_VAR, value)]));
            assert!(config.debug_messages, "value `{value}` should keep debug on");
        }
        for value in ["0", "false", "off", "No"] {
            let config = LogConfig::from_lookup(lookup(&[(DEBUG_MESSAGES_VAR, value)]));
            assert!(!config.debug_messages, "value `{value}` should turn debug off");
        }
    }
}
