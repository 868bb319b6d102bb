//! prize-selector — draw a RareLink prize winner from weighted submissions.

mod config;
mod report;
mod source;

use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use rarelink_raffle::{recent_submissions, run_raffle, SelectionError};
use rarelink_random::{BeaconSource, RandomSource, RngSource};
use rarelink_types::{SelectionWindow, Submission};
use rarelink_utils::LogFormat;
use std::path::PathBuf;

use config::RaffleConfig;
use report::RaffleReport;

#[derive(Parser, Debug)]
#[command(
    name = "prize-selector",
    about = "Select a prize winner; every player prop in a submission is one entry"
)]
struct Cli {
    /// First day of the window (YYYY-MM-DD, UTC).
    #[arg(long, requires = "end_date", conflicts_with_all = ["start", "end"])]
    start_date: Option<NaiveDate>,

    /// Last day of the window, inclusive (YYYY-MM-DD, UTC).
    #[arg(long, requires = "start_date")]
    end_date: Option<NaiveDate>,

    /// Exact window start, inclusive (RFC 3339).
    #[arg(long, requires = "end")]
    start: Option<DateTime<Utc>>,

    /// Exact window end, exclusive (RFC 3339).
    #[arg(long, requires = "start")]
    end: Option<DateTime<Utc>>,

    /// JSON file of submissions. Overrides `submissions_path` in the config.
    #[arg(long, env = "RAFFLE_SUBMISSIONS")]
    submissions: Option<PathBuf>,

    /// Seed for a reproducible draw.
    #[arg(long, env = "RAFFLE_SEED", conflicts_with = "beacon")]
    seed: Option<u64>,

    /// Hex-encoded public seed (e.g. a block hash) for a replayable draw.
    #[arg(long, env = "RAFFLE_BEACON")]
    beacon: Option<String>,

    /// Print the participant leaderboard.
    #[arg(short, long)]
    verbose: bool,

    /// Write the report as JSON to this file.
    #[arg(short, long, env = "RAFFLE_OUTPUT")]
    output: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "RAFFLE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "RAFFLE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "RAFFLE_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// File settings as the base, flags layered on top.
    fn merged_config(&self) -> anyhow::Result<RaffleConfig> {
        let file_config = match &self.config {
            Some(path) => RaffleConfig::from_toml_file(path)?,
            None => RaffleConfig::default(),
        };
        Ok(RaffleConfig {
            submissions_path: self.submissions.clone().or(file_config.submissions_path),
            output: self.output.clone().or(file_config.output),
            log_format: self.log_format.unwrap_or(file_config.log_format),
            log_level: self.log_level.clone().unwrap_or(file_config.log_level),
            ..file_config
        })
    }

    fn window(&self) -> anyhow::Result<SelectionWindow> {
        let window = match (self.start_date, self.end_date, self.start, self.end) {
            (Some(start), Some(end), _, _) => SelectionWindow::from_dates(start, end),
            (_, _, Some(start), Some(end)) => SelectionWindow::new(start, end),
            _ => anyhow::bail!(
                "a window is required: pass --start-date/--end-date or --start/--end"
            ),
        };
        window.map_err(|e| anyhow::anyhow!(SelectionError::from(e).user_message()))
    }

    /// The draw's randomness, plus the seed commitment when drawing from a beacon.
    fn random_source(
        &self,
        window: &SelectionWindow,
    ) -> anyhow::Result<(Box<dyn RandomSource>, Option<String>)> {
        if let Some(seed) = self.seed {
            return Ok((Box::new(RngSource::seeded(seed)), None));
        }
        if let Some(hex_seed) = &self.beacon {
            let context = format!("rarelink-raffle:{window}");
            let beacon = BeaconSource::from_hex(hex_seed, context.into_bytes())?;
            let commitment = beacon.commitment();
            return Ok((Box::new(beacon), Some(commitment)));
        }
        Ok((Box::new(RngSource::from_entropy()), None))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.merged_config()?;
    rarelink_utils::init_logging(config.log_format, &config.log_level);

    let window = cli.window()?;
    let submissions_path = config.submissions_path.as_deref().context(
        "no submissions file: pass --submissions or set submissions_path in the config",
    )?;
    let submissions = source::load_submissions(submissions_path)?;

    let (mut rng, beacon_commitment) = cli.random_source(&window)?;

    tracing::info!(
        %window,
        submissions = submissions.len(),
        source = rng.name(),
        "starting raffle"
    );

    let outcome = match run_raffle(&submissions, &window, rng.as_mut()) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "raffle failed");
            anyhow::bail!("{}", e.user_message());
        }
    };

    let winner_history: Vec<Submission> = recent_submissions(
        &submissions,
        &outcome.result.winning_user_id,
        config.history_limit,
    )
    .into_iter()
    .cloned()
    .collect();
    let leaderboard = if cli.verbose {
        outcome.leaderboard(config.leaderboard_size)
    } else {
        Vec::new()
    };

    let report = RaffleReport {
        result: outcome.result,
        random_source: rng.name().to_string(),
        beacon_commitment,
        winner_history,
        leaderboard,
    };
    report.print_summary();

    if let Some(path) = &config.output {
        report
            .write_json(path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(())
}
