//! Client configuration baked in at build time.
//!
//! Optional build environment:
//! - `DASHBOARD_API_HOST`: API base URL, default `/api`
//! - `DASHBOARD_TOAST_TIMEOUT_MS`: notification lifetime, default 1500

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_HOST: &str = "/api";
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 1500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_host: String,
    pub toast_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_host: DEFAULT_API_HOST.to_owned(), toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("DASHBOARD_API_HOST"), option_env!("DASHBOARD_TOAST_TIMEOUT_MS"))
    }

    /// Build config from raw values; blank or unparsable values use defaults.
    pub fn from_values(api_host: Option<&str>, toast_timeout_ms: Option<&str>) -> Self {
        let api_host = api_host
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_HOST)
            .trim_end_matches('/')
            .to_owned();
        let toast_timeout_ms = toast_timeout_ms
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_TOAST_TIMEOUT_MS);
        Self { api_host, toast_timeout_ms }
    }
}
