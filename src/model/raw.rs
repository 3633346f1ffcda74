//! Upstream JSON shapes as returned by the Discord REST API
//!
//! Only the fields the normalizer reads are declared. Fields marked
//! `#[serde(default)]` have a documented fallback; every other field is
//! required and its absence is reported as a shape failure.

use super::{Emoji, Snowflake};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct RawGuild {
    pub id: Snowflake,
    pub name: String,
    /// Only present when the guild is read in the context of the current user
    #[serde(default, deserialize_with = "deserialize_permissions")]
    pub permissions: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawChannel {
    pub id: Snowflake,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: String,
    #[serde(default)]
    pub bot: Option<bool>,
    #[serde(default)]
    pub system: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGuildMember {
    pub user: RawUser,
    #[serde(default)]
    pub nick: Option<String>,
    pub roles: Vec<Snowflake>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAuthor {
    pub id: Snowflake,
}

/// Entry of a message's `reactions` array (one per distinct emoji)
#[derive(Debug, Clone, Deserialize)]
pub struct RawReactionCount {
    pub emoji: Emoji,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMentionedUser {
    pub id: Snowflake,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    pub id: Snowflake,
    pub author: RawAuthor,
    /// ISO-8601 timestamp, e.g. `2020-03-03T23:35:10.615000+00:00`
    pub timestamp: String,
    pub content: String,
    #[serde(default)]
    pub reactions: Option<Vec<RawReactionCount>>,
    #[serde(default)]
    pub mentions: Option<Vec<RawMentionedUser>>,
    #[serde(default)]
    pub webhook_id: Option<Snowflake>,
}

/// Item of the reactions endpoint: the user who reacted
///
/// The endpoint returns user objects, so `id` is the reacting user's id.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReactor {
    pub id: Snowflake,
    #[serde(default)]
    pub emoji: Option<Emoji>,
}

/// Discord sends permission bitsets as decimal strings; older responses use numbers
fn deserialize_permissions<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Permissions {
        Number(u64),
        Text(String),
    }

    match Option::<Permissions>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Permissions::Number(bits)) => Ok(Some(bits)),
        Some(Permissions::Text(bits)) => bits
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
