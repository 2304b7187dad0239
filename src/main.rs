// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::app_config::Config;
use crate::store::StatusRepository;
use app_controller::Controller;
use content::ContentDocument;
use language::TargetLanguage;
use query::ContentQuery;

mod api;
mod app_config;
mod app_controller;
mod content;
mod errors;
mod file_utils;
mod language;
mod pipeline;
mod providers;
mod query;
mod store;

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the content API server
    Serve,

    /// Translate the content document to a target language (or 'all')
    Translate {
        /// Target language code ('de', 'es', 'fr', 'pt', 'ru', 'ko', 'ja') or 'all'
        #[arg(value_name = "LANGUAGE")]
        language: String,
    },

    /// Apply the text-fix pass to translated documents ('all' or one language)
    Fix {
        /// Target language code or 'all'
        #[arg(value_name = "LANGUAGE")]
        language: String,
    },

    /// Generate shell completions for hookline
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// hookline - creator content backend and localization pipeline
///
/// Serves visual styles, hooks and scripts over HTTP and maintains
/// per-language translated copies of the content document through a
/// resumable batch pipeline.
#[derive(Parser, Debug)]
#[command(name = "hookline")]
#[command(version = "1.0.0")]
#[command(about = "Creator content backend and localization pipeline")]
#[command(long_about = "hookline serves creator content (visual styles, hooks, scripts) over a
small JSON API and maintains per-language translated copies of the content
document through a checkpointed, resumable translation pipeline.

EXAMPLES:
    hookline serve                        # Start the API server
    hookline translate de                 # Translate content to German
    hookline translate all                # Translate to every supported language
    hookline fix all                      # Fix known mistranslations in place
    hookline completions bash             # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
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

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "hookline", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config = load_or_create_config(&cli.config_path, cli.log_level.clone())?;

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    match cli.command {
        Commands::Serve => run_serve(config).await,
        Commands::Translate { language } => run_translate(config, &language).await,
        Commands::Fix { language } => run_fix(config, &language).await,
        Commands::Completions { .. } => unreachable!("handled above"),
    }
}

/// Load the config file, or create a default one when it is missing
fn load_or_create_config(
    config_path: &str,
    log_level: Option<CliLogLevel>,
) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        if let Some(level) = log_level {
            config.log_level = level.into();
        }

        Ok(config)
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let mut config = Config::default();
        if let Some(level) = log_level {
            config.log_level = level.into();
        }

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}

async fn run_serve(config: Config) -> Result<()> {
    let document = ContentDocument::load(&config.content_file)?;
    log::info!(
        "Loaded content document: {} visual styles, {} hooks, {} scripts",
        document.visual_styles.len(),
        document.hooks.len(),
        document.scripts.len()
    );

    let status = match &config.database_path {
        Some(path) => StatusRepository::new(store::DatabaseConnection::new(path)?),
        None => StatusRepository::new_default()?,
    };

    let state = api::AppState::new(ContentQuery::new(document), status);
    api::serve(state, &config.server).await
}

async fn run_translate(config: Config, language: &str) -> Result<()> {
    let controller = Controller::with_config(config)?;

    if language.eq_ignore_ascii_case("all") {
        controller.translate_all().await
    } else {
        let target = TargetLanguage::parse(language)?;
        controller.translate_language(target).await.map(|_| ())
    }
}

async fn run_fix(config: Config, language: &str) -> Result<()> {
    let controller = Controller::with_config(config)?;

    if language.eq_ignore_ascii_case("all") {
        controller.fix_all().await
    } else {
        let target = TargetLanguage::parse(language)?;
        controller.fix_language(target).await
    }
}
