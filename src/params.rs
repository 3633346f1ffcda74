use crate::fetcher::FetchConfig;
use crate::model::Snowflake;
use anyhow::Context as _;
use serde::Deserialize;
use std::time::Duration;

/// Default Discord REST API root
fn default_api_base_url() -> String {
    "https://discord.com/api".to_string()
}

/// Default members page size (Discord's maximum for this endpoint)
fn default_members_limit() -> usize {
    1000
}

/// Default messages page size (Discord's maximum for this endpoint)
fn default_messages_limit() -> usize {
    100
}

/// Default reactions page size (Discord's maximum for this endpoint)
fn default_reactions_limit() -> usize {
    100
}

/// Default HTTP request timeout in seconds
fn default_http_timeout() -> u64 {
    30
}

/// Default HTTP connection timeout in seconds
fn default_http_connect_timeout() -> u64 {
    10
}

#[derive(Deserialize, Clone)]
pub struct Params {
    #[serde(default)]
    pub insecure_mode: bool,
    pub discord_token: String,
    pub guild_id: Snowflake,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    // HTTP Client Configuration
    #[serde(default = "default_http_timeout")]
    pub http_timeout: u64,
    #[serde(default = "default_http_connect_timeout")]
    pub http_connect_timeout: u64,

    // ========================================
    // Page Sizes
    // ========================================
    #[serde(default = "default_members_limit")]
    pub members_limit: usize,
    #[serde(default = "default_messages_limit")]
    pub messages_limit: usize,
    #[serde(default = "default_reactions_limit")]
    pub reactions_limit: usize,
}

/// Mask sensitive strings by showing only first and last few characters
///
/// Counts characters, not bytes, so multi-byte input never splits a char.
fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    let chars: Vec<char> = s.chars().collect();

    if chars.len() <= VISIBLE_CHARS * 2 {
        // Too short to reveal both ends: keep only the first char
        return match chars.first() {
            Some(first) => format!("{}***", first),
            None => "<empty>".to_string(),
        };
    }

    let head: String = chars[..VISIBLE_CHARS].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE_CHARS..].iter().collect();
    format!("{}***{}", head, tail)
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("insecure_mode", &self.insecure_mode)
            .field("discord_token", &mask_token(&self.discord_token))
            .field("guild_id", &self.guild_id)
            .field("api_base_url", &self.api_base_url)
            .field("http_timeout", &self.http_timeout)
            .field("http_connect_timeout", &self.http_connect_timeout)
            .field("members_limit", &self.members_limit)
            .field("messages_limit", &self.messages_limit)
            .field("reactions_limit", &self.reactions_limit)
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        envy::from_env::<Params>().context("Failed to load configuration")
    }

    /// Fetcher settings derived from these parameters
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            guild_id: self.guild_id.clone(),
            members_limit: self.members_limit,
            messages_limit: self.messages_limit,
            reactions_limit: self.reactions_limit,
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    pub fn http_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.http_connect_timeout)
    }
}
