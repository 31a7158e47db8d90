//! Command line entry point for the ELO rating tracker
//!
//! Replays a TOML match log through a roster and prints the resulting
//! standings, or the full roster with histories as JSON.

use anyhow::Result;
use clap::Parser;
use elo_tracker::config::AppConfig;
use elo_tracker::matches::MatchLog;
use elo_tracker::{MatchRecorder, Player, Roster};
use std::path::PathBuf;
use tracing::{error, info};

/// ELO Tracker - head-to-head ratings with per-player match history
#[derive(Parser)]
#[command(
    name = "elo-tracker",
    version,
    about = "Replay head-to-head match results and report ELO standings",
    long_about = "ELO Tracker reads a TOML match log of [[players]] seeds and [[matches]] \
                 results, applies a K-factor ELO update for every match in order, and \
                 prints the final standings."
)]
struct Args {
    /// Match log to replay
    #[arg(value_name = "MATCH_LOG", required_unless_present = "dry_run")]
    match_log: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// K-factor override
    #[arg(short, long, value_name = "K", help = "Override the K-factor")]
    k_factor: Option<u32>,

    /// Default rating override
    #[arg(
        long,
        value_name = "RATING",
        allow_negative_numbers = true,
        help = "Override the rating given to unseeded players"
    )]
    default_rating: Option<i64>,

    /// Print the roster as JSON
    #[arg(long, help = "Print players and their match histories as JSON")]
    json: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without replaying")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if let Some(k_factor) = args.k_factor {
        config.rating.k_factor = k_factor;
    }

    if let Some(default_rating) = args.default_rating {
        config.rating.default_rating = default_rating;
    }

    elo_tracker::config::validate_config(&config)?;
    Ok(config)
}

fn print_standings(standings: &[&Player]) {
    println!(
        "{:>4}  {:<24} {:>7} {:>5} {:>5}",
        "#", "Player", "Rating", "W", "L"
    );
    for (rank, player) in standings.iter().enumerate() {
        println!(
            "{:>4}  {:<24} {:>7} {:>5} {:>5}",
            rank + 1,
            player.name(),
            player.rating(),
            player.wins(),
            player.losses()
        );
    }
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let Some(match_log_path) = &args.match_log else {
        return Ok(());
    };

    info!("Loading match log from: {}", match_log_path.display());
    let log = MatchLog::from_file(match_log_path)?;

    let recorder = MatchRecorder::with_config(config.rating.clone())?;
    let mut roster = Roster::new(config.rating.default_rating);
    log.replay(&mut roster, &recorder)?;

    let standings = roster.standings();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
    } else {
        print_standings(&standings);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "{} v{} (K = {}, default rating = {})",
        config.service.name,
        elo_tracker::VERSION,
        config.rating.k_factor,
        config.rating.default_rating
    );

    if args.dry_run {
        info!("Configuration validation successful");
        return Ok(());
    }

    if let Err(e) = run(&args, &config) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating_overrides() {
        let args = Args::try_parse_from([
            "elo-tracker",
            "--k-factor",
            "16",
            "--default-rating",
            "-200",
            "log.toml",
        ])
        .unwrap();

        assert_eq!(args.k_factor, Some(16));
        assert_eq!(args.default_rating, Some(-200));
        assert_eq!(args.match_log, Some(PathBuf::from("log.toml")));
        assert!(!args.dry_run);
        assert!(!args.json);
    }

    #[test]
    fn test_parse_short_flags() {
        let args = Args::try_parse_from([
            "elo-tracker",
            "-k",
            "24",
            "-l",
            "debug",
            "--json",
            "log.toml",
        ])
        .unwrap();

        assert_eq!(args.k_factor, Some(24));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.json);
    }

    #[test]
    fn test_match_log_required_unless_dry_run() {
        assert!(Args::try_parse_from(["elo-tracker"]).is_err());

        let args = Args::try_parse_from(["elo-tracker", "--dry-run"]).unwrap();
        assert!(args.dry_run);
        assert!(args.match_log.is_none());
    }

    #[test]
    fn test_invalid_k_factor_rejected() {
        assert!(Args::try_parse_from(["elo-tracker", "--k-factor", "-3", "log.toml"]).is_err());
        assert!(Args::try_parse_from(["elo-tracker", "--k-factor", "many", "log.toml"]).is_err());
    }

    #[test]
    fn test_overrides_applied_to_config() {
        let args = Args::try_parse_from([
            "elo-tracker",
            "--dry-run",
            "--k-factor",
            "12",
            "--default-rating",
            "-200",
        ])
        .unwrap();

        let config = load_config(&args).unwrap();
        assert_eq!(config.rating.k_factor, 12);
        assert_eq!(config.rating.default_rating, -200);
    }
}
