use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use mlb::config;
use mlb::data_provider::{FeedProvider, FileFeed, MockFeed};
use mlb::tui;

/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "mlb")]
#[command(
    about = "Live MLB game dashboard",
    long_about = "Live MLB game dashboard\n\nFollows one game feed and renders score, matchup and lineups in the terminal."
)]
struct Cli {
    /// Path to a game feed JSON document, re-read on every refresh
    #[arg(short = 'f', long)]
    feed: Option<PathBuf>,

    /// Run against a scripted demo game instead of a feed
    #[arg(long)]
    demo: bool,

    /// Do not mirror the score into the terminal title
    #[arg(long)]
    no_title: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("title: {}", cfg.title);
    println!("time_format: {}", cfg.time_format);
}

/// Resolve log configuration from CLI args and config file.
/// CLI arguments take precedence over the config file.
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Some(Commands::Config) = cli.command {
        handle_config_command();
        return;
    }

    let provider: Arc<dyn FeedProvider> = match (&cli.feed, cli.demo) {
        (Some(path), _) => Arc::new(FileFeed::new(path)),
        (None, true) => Arc::new(MockFeed::new()),
        (None, false) => {
            eprintln!("No feed source: pass --feed <path> or --demo");
            std::process::exit(2);
        }
    };

    let mut config = config;
    if cli.no_title {
        config.title = false;
    }

    if let Err(e) = tui::run(config, provider).await {
        eprintln!("Error running dashboard: {:#}", e);
        tracing::error!("Dashboard failed: {:#}", e);
        std::process::exit(1);
    }
}
