use serde::Serialize;

/// Channel kinds recognized by the fetcher
///
/// Codes outside the known table collapse into `Unknown` so a new channel kind
/// never fails a channel listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelType {
    GuildText,
    Dm,
    GuildVoice,
    GroupDm,
    GuildCategory,
    GuildNews,
    GuildStore,
    Unknown,
}

/// Map a raw Discord channel `type` code to a [`ChannelType`]
pub fn channel_type_from_id(code: u64) -> ChannelType {
    match code {
        0 => ChannelType::GuildText,
        1 => ChannelType::Dm,
        2 => ChannelType::GuildVoice,
        3 => ChannelType::GroupDm,
        4 => ChannelType::GuildCategory,
        5 => ChannelType::GuildNews,
        6 => ChannelType::GuildStore,
        _ => ChannelType::Unknown,
    }
}
