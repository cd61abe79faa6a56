use std::env;

use crate::error::{Error, Result};
use crate::units::FormatDirective;

pub const FORMAT_ENV: &str = "BYTEUNITS_FORMAT";
pub const DECIMAL_ENV: &str = "BYTEUNITS_DECIMAL";

/// Directive used when neither `--format` nor `BYTEUNITS_FORMAT` is set.
pub const DEFAULT_FORMAT: &str = "%s";

/// Formatting defaults taken from the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatConfig {
    pub directive: FormatDirective,
}

/// Load formatting defaults from environment variables
pub fn load_format_config() -> Result<FormatConfig> {
    load_format_config_with(|key| env::var(key).ok())
}

/// Load formatting defaults through `lookup`, which maps a variable name to its value.
pub fn load_format_config_with<F>(lookup: F) -> Result<FormatConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let format = lookup(FORMAT_ENV).unwrap_or_else(|| DEFAULT_FORMAT.to_string());
    let mut directive: FormatDirective = format.parse()?;

    if let Some(value) = lookup(DECIMAL_ENV) {
        directive.decimal |= parse_flag(DECIMAL_ENV, &value)?;
    }

    log::debug!("load_format_config directive={directive}");
    Ok(FormatConfig { directive })
}

// Helper function to keep boolean env parsing in one place.
fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidEnvVar {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
