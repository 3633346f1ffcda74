//! Request paths for each resource kind
//!
//! Paths are plain interpolation with no escaping; identifiers must already be
//! valid path segments. The guild path has no leading slash while all others
//! do, which matches the routes this fetcher has always emitted.

use crate::model::Snowflake;

pub fn guild(guild_id: &Snowflake) -> String {
    format!("guilds/{}", guild_id)
}

/// Discord returns every channel of a guild in one response, so there is no cursor
pub fn channels(guild_id: &Snowflake) -> String {
    format!("/guilds/{}/channels", guild_id)
}

pub fn members(guild_id: &Snowflake, after: &Snowflake, limit: usize) -> String {
    format!("/guilds/{}/members?after={}&limit={}", guild_id, after, limit)
}

pub fn messages(channel_id: &Snowflake, after: &Snowflake, limit: usize) -> String {
    format!(
        "/channels/{}/messages?after={}&limit={}",
        channel_id, after, limit
    )
}

pub fn reactions(
    channel_id: &Snowflake,
    message_id: &Snowflake,
    emoji_ref: &str,
    after: &Snowflake,
    limit: usize,
) -> String {
    format!(
        "/channels/{}/messages/{}/reactions/{}?after={}&limit={}",
        channel_id, message_id, emoji_ref, after, limit
    )
}
