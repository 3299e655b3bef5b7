//! Resolution of the optional YouTube API key.
//!
//! Tried in order until one yields a non-empty trimmed value:
//! 1. the `NEON_SHELL_YT_API_KEY` environment variable, injected at runtime
//! 2. the `youtube_api_key` attribute of the config file
//! 3. a compiled-in fallback, left empty in shipped builds

use std::env;

use crate::commands::config::Config;

pub const YT_KEY_ENV: &str = "NEON_SHELL_YT_API_KEY";

// Should stay empty in committed code; the key belongs in tier 1 or 2.
const BUILT_IN_KEY: &str = "";

pub fn resolve(config: &Config) -> Option<String> {
    resolve_with(|name| env::var(name).ok(), config)
}

fn resolve_with<F>(env_lookup: F, config: &Config) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(env_lookup(YT_KEY_ENV))
        .or_else(|| non_empty(config.youtube_api_key.clone()))
        .or_else(|| non_empty(Some(BUILT_IN_KEY.to_owned())))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
