//! Shaping rules from raw Discord items to normalized records
//!
//! Each rule is a pure, length-preserving function of one raw item. Optional
//! upstream fields are resolved by the small named rules at the bottom of
//! this module so every default can be read and tested on its own.

use crate::model::raw::{
    RawChannel, RawGuild, RawGuildMember, RawMentionedUser, RawReactionCount, RawReactor, RawUser,
};
use crate::model::{
    Channel, Emoji, Guild, GuildMember, GuildUser, Message, RawMessage, Reaction, Snowflake,
    channel_type_from_id, is_authored_by_non_user,
};
use anyhow::Context as _;

pub fn guild(raw: RawGuild) -> Guild {
    Guild {
        id: raw.id,
        name: raw.name,
        permissions: raw.permissions,
    }
}

pub fn channel(raw: RawChannel) -> Channel {
    Channel {
        id: raw.id,
        name: raw.name,
        channel_type: channel_type_from_id(raw.kind),
    }
}

pub fn member(raw: RawGuildMember) -> GuildMember {
    let bot = user_is_bot(&raw.user);
    GuildMember {
        user: GuildUser {
            id: raw.user.id,
            username: raw.user.username,
            discriminator: raw.user.discriminator,
            bot,
        },
        nick: member_nick(raw.nick),
        roles: raw.roles,
    }
}

pub fn message(raw: RawMessage, channel_id: &Snowflake) -> anyhow::Result<Message> {
    let non_user_author = is_authored_by_non_user(&raw);
    let timestamp_ms = timestamp_ms(&raw.timestamp)?;

    Ok(Message {
        id: raw.id,
        channel_id: channel_id.clone(),
        author_id: raw.author.id,
        timestamp_ms,
        content: raw.content,
        reaction_emoji: reaction_emoji(raw.reactions),
        non_user_author,
        mentions: mention_ids(raw.mentions),
    })
}

/// The reactions endpoint lists users, so the item id is the reacting user
pub fn reaction(
    raw: RawReactor,
    emoji: &Emoji,
    channel_id: &Snowflake,
    message_id: &Snowflake,
) -> Reaction {
    Reaction {
        emoji: raw.emoji.unwrap_or_else(|| emoji.clone()),
        channel_id: channel_id.clone(),
        message_id: message_id.clone(),
        author_id: raw.id,
    }
}

/// Bot and system accounts both count as bots
fn user_is_bot(user: &RawUser) -> bool {
    user.bot.unwrap_or(false) || user.system.unwrap_or(false)
}

/// Missing, null and empty nicknames are all "no nickname"
fn member_nick(nick: Option<String>) -> Option<String> {
    nick.filter(|nick| !nick.is_empty())
}

fn timestamp_ms(timestamp: &str) -> anyhow::Result<i64> {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.timestamp_millis())
        .with_context(|| format!("Parsing message timestamp {:?}", timestamp))
}

/// Messages nobody reacted to omit `reactions`
fn reaction_emoji(reactions: Option<Vec<RawReactionCount>>) -> Vec<Emoji> {
    reactions
        .unwrap_or_default()
        .into_iter()
        .map(|reaction| reaction.emoji)
        .collect()
}

fn mention_ids(mentions: Option<Vec<RawMentionedUser>>) -> Vec<Snowflake> {
    mentions
        .unwrap_or_default()
        .into_iter()
        .map(|user| user.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn raw_user(bot: Option<bool>, system: Option<bool>) -> RawUser {
        RawUser {
            id: Snowflake::from("1"),
            username: "alice".to_string(),
            discriminator: "0001".to_string(),
            bot,
            system,
        }
    }

    #[rstest]
    #[case::neither(None, None, false)]
    #[case::explicit_false(Some(false), Some(false), false)]
    #[case::bot(Some(true), None, true)]
    #[case::system_only(Some(false), Some(true), true)]
    fn test_user_is_bot(
        #[case] bot: Option<bool>,
        #[case] system: Option<bool>,
        #[case] expected: bool,
    ) {
        assert_eq!(user_is_bot(&raw_user(bot, system)), expected);
    }

    #[rstest]
    #[case::missing(None, None)]
    #[case::empty(Some(""), None)]
    #[case::present(Some("ali"), Some("ali"))]
    fn test_member_nick(#[case] nick: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(
            member_nick(nick.map(str::to_string)),
            expected.map(str::to_string)
        );
    }

    #[test]
    fn test_member_without_nick_field() {
        let raw: RawGuildMember = serde_json::from_value(json!({
            "user": {"id": "7", "username": "bob", "discriminator": "1234", "bot": false, "system": true},
            "roles": ["10", "11"],
        }))
        .unwrap();

        let member = member(raw);

        assert_eq!(member.nick, None);
        assert!(member.user.bot);
        assert_eq!(
            member.roles,
            vec![Snowflake::from("10"), Snowflake::from("11")]
        );
    }

    #[test]
    fn test_timestamp_ms() {
        assert_eq!(
            timestamp_ms("2020-03-03T23:35:10.615000+00:00").unwrap(),
            1_583_278_510_615
        );
    }

    #[test]
    fn test_timestamp_ms_rejects_garbage() {
        assert!(timestamp_ms("yesterday").is_err());
    }

    #[test]
    fn test_message_defaults_when_optional_fields_missing() {
        let raw: RawMessage = serde_json::from_value(json!({
            "id": "1",
            "author": {"id": "2"},
            "timestamp": "2020-03-03T23:35:10.615000+00:00",
            "content": "x",
        }))
        .unwrap();

        let message = message(raw, &Snowflake::from("9")).unwrap();

        assert!(message.reaction_emoji.is_empty());
        assert!(message.mentions.is_empty());
        assert!(!message.non_user_author);
        assert_eq!(message.channel_id, Snowflake::from("9"));
    }

    #[test]
    fn test_channel_type_is_classified() {
        let raw: RawChannel =
            serde_json::from_value(json!({"id": "3", "name": "general", "type": 0})).unwrap();
        let channel = channel(raw);
        assert_eq!(channel.channel_type, crate::model::ChannelType::GuildText);
    }

    #[test]
    fn test_reaction_author_is_item_id() {
        let emoji = Emoji {
            id: Some(Snowflake::from("1")),
            name: "emojiname".to_string(),
        };
        let raw = RawReactor {
            id: Snowflake::from("5"),
            emoji: None,
        };

        let reaction = reaction(raw, &emoji, &Snowflake::from("1"), &Snowflake::from("2"));

        assert_eq!(reaction.author_id, Snowflake::from("5"));
        assert_eq!(reaction.emoji, emoji);
        assert_eq!(reaction.channel_id, Snowflake::from("1"));
        assert_eq!(reaction.message_id, Snowflake::from("2"));
    }
}
