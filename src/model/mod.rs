// Identifiers and classifiers
pub mod channel_type;
pub mod emoji;
pub mod snowflake;

// Wire shapes and normalized records
pub mod raw;
pub mod records;

pub use channel_type::{ChannelType, channel_type_from_id};
pub use emoji::{Emoji, EmojiRef, emoji_to_ref, ref_to_emoji};
pub use raw::RawMessage;
pub use records::{Channel, Guild, GuildMember, GuildUser, Message, Reaction};
pub use snowflake::Snowflake;

/// Whether a message was posted by something other than a user account
///
/// Webhook and integration posts carry a `webhook_id`; their `author` is a
/// synthetic user that does not correspond to a guild member.
pub fn is_authored_by_non_user(message: &RawMessage) -> bool {
    message.webhook_id.is_some()
}
