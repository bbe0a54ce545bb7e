//! Widget configuration baked in at build time.
//!
//! The wasm bundle has no runtime environment, so overrides come from
//! `option_env!` when the client is compiled:
//! - `ASSISTANT_ENDPOINT`: URL that receives `POST {"message": ...}`
//! - `ASSISTANT_TIMEOUT_SECS`: request ceiling, default 30, at most
//!   [`MAX_ASSISTANT_TIMEOUT_SECS`]
//! - `ASSISTANT_OWNER`: name shown in the panel header and page hero

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_ASSISTANT_ENDPOINT: &str = "https://portfolio-chat.boltnewpool10.workers.dev/";
pub const DEFAULT_ASSISTANT_TIMEOUT_SECS: u64 = 30;
/// Largest timeout whose millisecond value still fits a browser timer delay
/// (`i32`); longer delays fire immediately or fail to convert.
pub const MAX_ASSISTANT_TIMEOUT_SECS: u64 = i32::MAX as u64 / 1000;
pub const DEFAULT_ASSISTANT_OWNER: &str = "Abhishekh";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub owner: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("ASSISTANT_ENDPOINT"),
            option_env!("ASSISTANT_TIMEOUT_SECS"),
            option_env!("ASSISTANT_OWNER"),
        )
    }
}

impl WidgetConfig {
    /// Build config from raw override values. Blank values fall back to the
    /// defaults, as do timeouts that are unparsable, zero, or above
    /// [`MAX_ASSISTANT_TIMEOUT_SECS`].
    #[must_use]
    pub fn from_values(endpoint: Option<&str>, timeout_secs: Option<&str>, owner: Option<&str>) -> Self {
        let timeout_secs = timeout_secs
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| (1..=MAX_ASSISTANT_TIMEOUT_SECS).contains(secs))
            .unwrap_or(DEFAULT_ASSISTANT_TIMEOUT_SECS);

        Self {
            endpoint: non_blank(endpoint).unwrap_or(DEFAULT_ASSISTANT_ENDPOINT).to_owned(),
            timeout: Duration::from_secs(timeout_secs),
            owner: non_blank(owner).unwrap_or(DEFAULT_ASSISTANT_OWNER).to_owned(),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
