// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use playerscout::api::{build_router, AppState};
use playerscout::app_config::{self, Config};
use playerscout::providers::rekognition::RekognitionApi;
use playerscout::providers::translate::TranslateApi;
use playerscout::store::{PlayerRepository, StoreConnection};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// PlayerScout - Football player lookup service
///
/// Serves player search by name or photo over HTTP, with on-demand
/// translation of player data and UI texts.
#[derive(Parser, Debug)]
#[command(name = "playerscout")]
#[command(version = "1.0.0")]
#[command(about = "Football player lookup and translation service")]
struct CommandLineOptions {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Address to listen on, overriding the config file
    #[arg(short, long)]
    listen_address: Option<String>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &cli.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        config
            .save(config_path)
            .with_context(|| format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(listen_address) = &cli.listen_address {
        config.listen_address = listen_address.clone();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Open the player store
    let store = match &config.database_path {
        Some(path) => StoreConnection::new(path)?,
        None => StoreConnection::new_default()?,
    };
    info!("Player store at {:?}", store.path());
    let repository = PlayerRepository::new(store);

    // Build the provider clients
    let translation_provider = Arc::new(TranslateApi::new(
        &config.translation.endpoint,
        &config.translation.api_key,
        config.translation.timeout_secs,
    ));
    let face_provider = Arc::new(RekognitionApi::new(
        &config.face_recognition.endpoint,
        &config.face_recognition.api_key,
        &config.face_recognition.collection_id,
        config.face_recognition.timeout_secs,
    ));

    let state = AppState::new(&config, repository, translation_provider, face_provider);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.listen_address))?;
    info!("Listening on http://{}", config.listen_address);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
