use super::Snowflake;
use serde::{Deserialize, Serialize};

/// Emoji as it appears on a message reaction
///
/// Custom guild emoji carry an `id`; unicode emoji only have a `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emoji {
    #[serde(default)]
    pub id: Option<Snowflake>,
    pub name: String,
}

/// Wire reference to an emoji, used in the reactions endpoint path
///
/// - `name:id` for custom emoji
/// - `name` for unicode emoji
pub type EmojiRef = String;

/// Encode an emoji into its reference string
pub fn emoji_to_ref(emoji: &Emoji) -> anyhow::Result<EmojiRef> {
    if emoji.name.contains(':') {
        anyhow::bail!("Emoji name contains a colon: {:?}", emoji.name);
    }

    Ok(match &emoji.id {
        Some(id) => format!("{}:{}", emoji.name, id),
        None => emoji.name.clone(),
    })
}

/// Decode a reference string produced by [`emoji_to_ref`]
pub fn ref_to_emoji(emoji_ref: &str) -> anyhow::Result<Emoji> {
    let mut parts = emoji_ref.split(':');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), None, None) => Ok(Emoji {
            id: None,
            name: name.to_string(),
        }),
        (Some(name), Some(id), None) => Ok(Emoji {
            id: Some(Snowflake::new(id)),
            name: name.to_string(),
        }),
        _ => anyhow::bail!("Invalid emoji reference: {:?}", emoji_ref),
    }
}
