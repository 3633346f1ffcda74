use anyhow::Context as _;
use guildfetch::adapters::{DiscordTransport, HttpDiscordTransport};
use guildfetch::fetcher::GuildFetcher;
use guildfetch::model::{Channel, ChannelType, Guild, GuildMember, Message, Reaction, Snowflake};
use guildfetch::params::Params;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use tracing::info;

/// One line of output, tagged with the kind of record it carries
#[derive(Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
enum Record<'a> {
    Guild(&'a Guild),
    Channel(&'a Channel),
    Member(&'a GuildMember),
    Message(&'a Message),
    Reaction(&'a Reaction),
}

fn emit(out: &mut impl Write, record: Record<'_>) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, &record).context("Serializing record")?;
    writeln!(out).context("Writing record")?;
    Ok(())
}

/// Cursor that precedes every snowflake
fn first_cursor() -> Snowflake {
    Snowflake::from("0")
}

async fn walk_members<T: DiscordTransport>(
    fetcher: &GuildFetcher<T>,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut after = first_cursor();
    let mut count = 0;

    loop {
        let page = fetcher.members(&after).await?;
        for member in &page.results {
            emit(out, Record::Member(member))?;
        }
        count += page.results.len();

        match page.page_info.end_cursor {
            Some(cursor) if page.page_info.has_next_page => after = cursor,
            _ => return Ok(count),
        }
    }
}

async fn walk_reactions<T: DiscordTransport>(
    fetcher: &GuildFetcher<T>,
    message: &Message,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut count = 0;

    for emoji in &message.reaction_emoji {
        let mut after = first_cursor();
        loop {
            let page = fetcher
                .reactions(&message.channel_id, &message.id, emoji, &after)
                .await?;
            for reaction in &page.results {
                emit(out, Record::Reaction(reaction))?;
            }
            count += page.results.len();

            match page.page_info.end_cursor {
                Some(cursor) if page.page_info.has_next_page => after = cursor,
                _ => break,
            }
        }
    }

    Ok(count)
}

async fn walk_channel<T: DiscordTransport>(
    fetcher: &GuildFetcher<T>,
    channel: &Channel,
    out: &mut impl Write,
) -> anyhow::Result<(usize, usize)> {
    let mut after = first_cursor();
    let mut messages = 0;
    let mut reactions = 0;

    loop {
        let page = fetcher.messages(&channel.id, &after).await?;
        for message in &page.results {
            emit(out, Record::Message(message))?;
            reactions += walk_reactions(fetcher, message, out).await?;
        }
        messages += page.results.len();

        match page.page_info.end_cursor {
            Some(cursor) if page.page_info.has_next_page => after = cursor,
            _ => return Ok((messages, reactions)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only records
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guildfetch=info".into()),
        )
        .init();

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = Params::new()?;
    info!(?params, "Application parameters loaded");

    let base_url = url::Url::parse(&params.api_base_url).context("Parsing API_BASE_URL")?;
    let transport = Arc::new(HttpDiscordTransport::new(
        base_url,
        &params.discord_token,
        params.http_timeout(),
        params.http_connect_timeout(),
        params.insecure_mode,
    )?);
    let fetcher = GuildFetcher::new(transport, params.fetch_config());
    info!(config = ?fetcher.config(), "Fetcher configured");

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());

    let guild = fetcher.guild().await.context("Fetching guild")?;
    info!(guild_id = %guild.id, name = %guild.name, "Guild fetched");
    emit(&mut out, Record::Guild(&guild))?;

    let channels = fetcher.channels().await.context("Fetching channels")?;
    info!(count = channels.len(), "Channels fetched");
    for channel in &channels {
        emit(&mut out, Record::Channel(channel))?;
    }

    let members = walk_members(&fetcher, &mut out)
        .await
        .context("Fetching members")?;
    info!(count = members, "Members fetched");

    for channel in channels
        .iter()
        .filter(|channel| channel.channel_type == ChannelType::GuildText)
    {
        let (messages, reactions) = walk_channel(&fetcher, channel, &mut out)
            .await
            .with_context(|| format!("Fetching channel {}", channel.id))?;
        info!(
            channel_id = %channel.id,
            channel_name = %channel.name,
            messages,
            reactions,
            "Channel fetched"
        );
    }

    out.flush().context("Flushing output")?;
    Ok(())
}
