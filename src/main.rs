mod display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use display::output::{
    display_aggregate, display_champion_stats, display_champions, display_error, display_info,
    display_items, display_match_breakdown, display_match_history, display_profile,
    display_success, display_warning,
};
use indicatif::ProgressBar;
use riftpedia::analysis::champion_stats::ChampionStatsTracker;
use riftpedia::api::models::solo_rank_label;
use riftpedia::history::LOAD_MORE_INCREMENT;
use riftpedia::{AppError, Config, FetchError, MatchHistory, PlayerContext, Region, RiotApiClient};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "riftpedia")]
#[command(about = "League of Legends match history and reference data", long_about = None)]
struct Cli {
    /// Log filter when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a player's recent matches with derived stats
    History {
        /// Riot Game Name
        game_name: String,

        /// Riot Tag (tag line)
        tag_line: String,

        /// Region display name or platform code (default: RIOT_REGION or na1)
        #[arg(short, long)]
        region: Option<String>,

        /// Number of matches in the first page
        #[arg(short, long, default_value = "10")]
        count: usize,

        /// Extra "load more" pages to fetch after the first
        #[arg(long, default_value = "0")]
        more: usize,
    },

    /// Full scoreboard of one match
    Match {
        match_id: String,

        #[arg(short, long)]
        region: Option<String>,
    },

    /// List champions from Data Dragon
    Champions {
        /// Case-insensitive name filter
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// List items from Data Dragon
    Items {
        #[arg(short, long)]
        filter: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli.command).await {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<()> {
    let mut config = Config::from_env()?;

    match command {
        Command::History {
            game_name,
            tag_line,
            region,
            count,
            more,
        } => {
            if let Some(region) = region {
                config.region = region;
            }
            history(config, &game_name, &tag_line, count, more).await
        }
        Command::Match { match_id, region } => {
            if let Some(region) = region {
                config.region = region;
            }
            show_match(config, match_id).await
        }
        Command::Champions { filter } => champions(config, filter).await,
        Command::Items { filter } => items(config, filter).await,
    }
}

fn resolve_region(input: &str) -> Result<Region> {
    Region::resolve(input)
        .map_err(AppError::from)
        .with_context(|| format!("Supported regions: {}", Region::supported_platforms()))
}

async fn history(config: Config, game_name: &str, tag_line: &str, count: usize, more: usize) -> Result<()> {
    let region = resolve_region(&config.region)?;
    let client = Arc::new(RiotApiClient::new(&config));
    let riot_id = format!("{}#{}", game_name, tag_line);

    display_info(&format!("Fetching data for {} in {}", riot_id, region));

    // Step 1: Riot ID -> PUUID
    let account = {
        let client = Arc::clone(&client);
        let (name, tag) = (game_name.to_string(), tag_line.to_string());
        tokio::task::spawn_blocking(move || client.get_account(region.routing, &name, &tag)).await?
    }
    .map_err(|e| match e {
        FetchError::Status(404) => AppError::PlayerNotFound(riot_id.clone()),
        other => AppError::Fetch(other),
    })?;
    let player = PlayerContext::new(account.puuid, region);

    // Step 2: profile line; a missing rank is not fatal
    let profile = {
        let client = Arc::clone(&client);
        let player = player.clone();
        tokio::task::spawn_blocking(move || {
            let summoner = client.get_summoner(&player)?;
            let entries = client.get_league_entries(&player).unwrap_or_default();
            Ok::<_, FetchError>((summoner, entries))
        })
        .await?
    };
    match profile {
        Ok((summoner, entries)) => {
            display_profile(&riot_id, summoner.summoner_level, &solo_rank_label(&entries))
        }
        Err(e) => display_warning(&format!("Profile unavailable: {}", e)),
    }

    // Step 3: match history
    let mut history = MatchHistory::new(Arc::clone(&client), player, config.max_in_flight);

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message(format!("Fetching {} matches", count));
    let loaded = history
        .load(count)
        .await
        .with_context(|| format!("Error fetching match history for {}", riot_id))?;

    for _ in 0..more {
        spinner.set_message("Loading more matches");
        let added = history
            .load_more(LOAD_MORE_INCREMENT)
            .await
            .context("Error fetching additional matches")?;
        if added == 0 {
            break;
        }
    }
    spinner.finish_and_clear();

    if loaded < count {
        display_warning(&format!("{} of {} matches could be loaded", loaded, count));
    }
    display_success(&format!("Loaded {} matches", history.matches().len()));

    display_match_history(history.matches());
    display_aggregate(&history.stats());
    display_champion_stats(&ChampionStatsTracker::from_matches(history.matches()).get_stats());

    client.fetcher().throttle().display_status();
    Ok(())
}

async fn show_match(config: Config, match_id: String) -> Result<()> {
    let region = resolve_region(&config.region)?;
    let client = Arc::new(RiotApiClient::new(&config));

    let breakdown = {
        let client = Arc::clone(&client);
        let id = match_id.clone();
        tokio::task::spawn_blocking(move || client.fetch_match_breakdown(&id, &region)).await?
    }
    .with_context(|| format!("Error fetching match {}", match_id))?;

    display_match_breakdown(&breakdown);
    Ok(())
}

async fn champions(config: Config, filter: Option<String>) -> Result<()> {
    let client = RiotApiClient::new(&config);
    let data = tokio::task::spawn_blocking(move || client.get_champions())
        .await?
        .context("Error fetching champion list")?;

    let needle = filter.map(|f| f.to_lowercase());
    let mut champions: Vec<_> = data
        .data
        .into_values()
        .filter(|c| needle.as_ref().map_or(true, |n| c.name.to_lowercase().contains(n)))
        .collect();
    champions.sort_by(|a, b| a.name.cmp(&b.name));

    display_info(&format!("Data Dragon {}", data.version));
    display_champions(&champions);
    Ok(())
}

async fn items(config: Config, filter: Option<String>) -> Result<()> {
    let client = RiotApiClient::new(&config);
    let data = tokio::task::spawn_blocking(move || client.get_items())
        .await?
        .context("Error fetching item list")?;

    let needle = filter.map(|f| f.to_lowercase());
    let mut items: Vec<_> = data
        .data
        .into_iter()
        .filter(|(_, item)| item.gold.purchasable)
        .filter(|(_, item)| needle.as_ref().map_or(true, |n| item.name.to_lowercase().contains(n)))
        .collect();
    items.sort_by(|a, b| a.1.name.cmp(&b.1.name));

    display_info(&format!("Data Dragon {}", data.version));
    display_items(&items);
    Ok(())
}
