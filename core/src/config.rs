use serde::Deserialize;
use std::env::var;

const STRICT_VAR: &str = "TINYORM_STRICT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reject rows carrying columns the mapping table doesn't know.
    pub strict: bool,
}

impl Config {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Apply environment overrides on top of a loaded config.
    pub fn with_env(mut self) -> Self {
        if let Some(strict) = get_var_strict() {
            self.strict = strict;
        }
        self
    }
}

pub fn get_var_strict() -> Option<bool> {
    let value = var(STRICT_VAR).ok()?;
    let flag = parse_flag(&value);
    if flag.is_none() {
        tracing::warn!(var = STRICT_VAR, %value, "Ignoring unrecognized value");
    }
    flag
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
