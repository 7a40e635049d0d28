// Matchday entry point.
//
// Run sequence:
// 1. Initialize tracing (stderr, so stdout stays clean JSON)
// 2. Load config; an optional CLI argument overrides the sheet URL
// 3. Fetch and normalize the attending roster
// 4. Run the allocation engine (seeded RNG when configured)
// 5. Print the two-team response as pretty JSON on stdout

use std::path::Path;

use anyhow::Context;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use matchday::config;
use matchday::engine;
use matchday::ingest;
use matchday::protocol::AllocationResponse;

const CONFIG_PATH: &str = "matchday.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config =
        config::load_config(Path::new(CONFIG_PATH)).context("failed to load configuration")?;

    let arg_url = std::env::args().nth(1);
    let sheet_url = arg_url.as_deref().unwrap_or(&config.sheet.url);
    info!(url = sheet_url, "resolving roster sheet");

    let client = reqwest::Client::new();
    let players = ingest::sheet::fetch_roster(&client, sheet_url)
        .await
        .context("failed to fetch roster")?;
    info!(attending = players.len(), "roster loaded");

    let mut rng = match config.allocation.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let allocation = engine::allocate(&players, &mut rng).context("allocation failed")?;
    let response = AllocationResponse::build(
        &allocation,
        &players,
        &config.teams.name_a,
        &config.teams.name_b,
    );

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Initialize tracing to stderr; stdout is reserved for the JSON response.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("matchday=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
