mod render;
mod window;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use eventdesk_core::{DeskConfig, LivePipeline, SchoolLevel};
use tracing::info;
use tracing_subscriber::EnvFilter;

use render::Render;
use window::WindowRequest;

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "Build the weekly games and performances digest from the athletics schedule and arts feed")]
struct Cli {
    /// Use the current week (Monday to Sunday)
    #[arg(long, group = "window")]
    this_week: bool,

    /// Use next week (the default)
    #[arg(long, group = "window")]
    next_week: bool,

    /// Only today's events
    #[arg(long, group = "window")]
    today: bool,

    /// Custom range start (YYYY-MM-DD)
    #[arg(long, group = "window", requires = "end_date")]
    start_date: Option<String>,

    /// Custom range end (YYYY-MM-DD)
    #[arg(long, requires = "start_date")]
    end_date: Option<String>,

    /// Restrict the digest to one school level
    #[arg(long, value_enum)]
    level: Option<Level>,

    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Also write the digest as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/eventdesk/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Level {
    Middle,
    Upper,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Summary,
    Json,
}

impl From<Level> for SchoolLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Middle => SchoolLevel::MiddleSchool,
            Level::Upper => SchoolLevel::UpperSchool,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = DeskConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let tz = config.tz()?;
    let today = Utc::now().with_timezone(&tz).date_naive();

    let request = WindowRequest::from_flags(
        cli.this_week,
        cli.next_week,
        cli.today,
        cli.start_date,
        cli.end_date,
    );
    let range = request.resolve(today)?;

    let pipeline = LivePipeline::from_config(&config).context("Failed to set up fetchers")?;
    let mut digest = pipeline.run(range).await;
    if let Some(level) = cli.level {
        digest = digest.for_level(level.into());
    }

    let json = serde_json::to_string_pretty(&digest).context("Failed to serialize digest")?;

    if let Some(path) = &cli.output {
        std::fs::write(path, &json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote digest");
    }

    match cli.format {
        Format::Summary => println!("{}", digest.render()),
        Format::Json if cli.output.is_none() => println!("{}", json),
        Format::Json => {}
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "eventdesk=debug,eventdesk_core=debug"
    } else {
        "eventdesk=info,eventdesk_core=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
