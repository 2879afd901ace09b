//! Environment configuration.

use std::env;

/// Render width used when `FORM_KIT_WIDTH` is unset or unusable.
pub const DEFAULT_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub debug: bool,
    pub log_file: Option<String>,
    pub width: usize,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            debug: env_flag("FORM_KIT_DEBUG"),
            log_file: env_string_opt("FORM_KIT_LOG"),
            width: env_string_opt("FORM_KIT_WIDTH")
                .and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|width| *width > 0)
                .unwrap_or(DEFAULT_WIDTH),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_file: None,
            width: DEFAULT_WIDTH,
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
