use super::{ChannelType, Emoji, Snowflake};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guild {
    pub id: Snowflake,
    pub name: String,
    pub permissions: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Channel {
    pub id: Snowflake,
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuildUser {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: String,
    /// `true` for bot accounts and for Discord system users
    pub bot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuildMember {
    pub user: GuildUser,
    pub nick: Option<String>,
    pub roles: Vec<Snowflake>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub author_id: Snowflake,
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: i64,
    pub content: String,
    pub reaction_emoji: Vec<Emoji>,
    /// Posted by a webhook or integration rather than a user account
    pub non_user_author: bool,
    pub mentions: Vec<Snowflake>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub emoji: Emoji,
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub author_id: Snowflake,
}
