//! Configuration defaults and environment lookups.
//!
//! Every setting has a constant default and an environment variable that
//! overrides it. Invalid values fall back to the default.

/// Environment variable names.
pub mod env_vars {
    /// Fail the whole library load on the first invalid keyword.
    pub const STRICT: &str = "ROBOLIB_STRICT";
    /// Emit JSON logs instead of the compact human format.
    pub const LOG_JSON: &str = "ROBOLIB_LOG_JSON";
    /// Default library used by the command line tool.
    pub const LIBRARY: &str = "ROBOLIB_LIBRARY";

    /// Strict loading, or the default.
    pub fn strict() -> bool {
        super::parse_bool(std::env::var(STRICT).ok().as_deref(), super::defaults::STRICT)
    }

    /// JSON logging, or the default.
    pub fn log_json() -> bool {
        super::parse_bool(std::env::var(LOG_JSON).ok().as_deref(), super::defaults::LOG_JSON)
    }

    /// Library name, if set and not blank.
    pub fn library() -> Option<String> {
        std::env::var(LIBRARY)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

/// Default values.
pub mod defaults {
    pub const STRICT: bool = false;
    pub const LOG_JSON: bool = false;
    pub const LOG_FILTER: &str = "robolib=info";
}

/// Parse `true/false/1/0/yes/no/on/off`, case-insensitively.
pub fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_lowercase()) {
        Some(v) if matches!(v.as_str(), "true" | "1" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "false" | "0" | "no" | "off") => false,
        _ => default,
    }
}

/// Library loading options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Fail instead of skipping invalid or duplicate keywords.
    pub strict: bool,
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            strict: env_vars::strict(),
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
