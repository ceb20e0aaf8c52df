use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use log::{error, info, warn};

use crate::api::discord::{DiscordApi, DiscordClient};
use crate::api::openai::{ChatApi, OpenAiClient};
use crate::cli::Args;
use crate::models::{ConversationUnit, Summary};
use crate::{fetch, prompt, summarize, walker};

pub async fn run(args: Args) -> Result<()> {
    if args.discord_token.is_empty() || args.openai_api_key.is_empty() {
        bail!("DISCORD_TOKEN and OPENAI_API_KEY must be set");
    }
    if args.days <= 0 {
        bail!("--days must be a positive number of days");
    }

    let discord = DiscordClient::new(args.discord_token);
    let openai = OpenAiClient::new(args.openai_api_key, args.model);

    run_pipeline(&discord, &openai, args.days).await
}

/// One full pass over every accessible guild. Returns `Ok(())` when the
/// hierarchy was exhausted; startup and enumeration failures bubble up,
/// per-unit failures do not.
pub async fn run_pipeline(
    discord: &impl DiscordApi,
    chat: &impl ChatApi,
    days: i64,
) -> Result<()> {
    let user = discord
        .current_user()
        .await
        .context("Failed to connect to Discord")?;
    info!("Logged in as {}", user.username);

    let cutoff = Utc::now() - Duration::days(days);

    let guilds = discord
        .list_guilds()
        .await
        .context("Failed to enumerate guilds")?;

    for guild in guilds {
        info!("Processing guild: {}", guild.name);

        for unit in walker::guild_units(discord, &guild.id).await? {
            process_unit(discord, chat, &unit, cutoff, days).await;
        }
    }

    Ok(())
}

/// Per-unit boundary: nothing that happens in here stops the run.
async fn process_unit(
    discord: &impl DiscordApi,
    chat: &impl ChatApi,
    unit: &ConversationUnit,
    cutoff: DateTime<Utc>,
    days: i64,
) {
    info!("Processing {}: {}", unit.noun(), unit.name);

    let messages = match fetch::fetch_window(discord, &unit.id, cutoff).await {
        Ok(messages) => messages,
        Err(e) => {
            error!(
                "Failed to fetch history for {} {}: {}",
                unit.noun(),
                unit.name,
                e
            );
            Vec::new()
        }
    };

    if messages.is_empty() {
        warn!(
            "No messages found in {} {} for the past {} days",
            unit.noun(),
            unit.name,
            days
        );
    } else {
        info!(
            "Found {} messages in {} {}",
            messages.len(),
            unit.noun(),
            unit.name
        );
    }

    let instruction = prompt::select_prompt(&unit.name, unit.is_thread(), days);
    let text = summarize::generate(chat, unit, &messages, &instruction).await;

    print_summary(&Summary {
        unit_name: unit.name.clone(),
        is_thread: unit.is_thread(),
        text,
    });
}

fn print_summary(summary: &Summary) {
    let heading = if summary.is_thread {
        format!("Thread: {}", summary.unit_name)
    } else {
        format!("#{}", summary.unit_name)
    };

    println!("\n{}", "=".repeat(80));
    println!("{}", heading);
    println!("{}", "=".repeat(80));
    println!("{}", summary.text);
}
