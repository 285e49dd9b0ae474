// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::app_config::{Config, LogLevel};
use crate::app_controller::Controller;
use crate::errors::PipelineError;
use crate::file_utils::FileManager;

mod app_config;
mod app_controller;
mod document_renderer;
mod errors;
mod fetcher;
mod file_utils;
mod grammar_repair;
mod providers;
mod text_normalizer;
mod transcript;
mod video_id;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for ytscribe
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// ytscribe - YouTube transcripts as paginated PDF documents
///
/// Fetches the caption transcript of a YouTube video, repairs its
/// punctuation heuristically and renders it as a paginated PDF.
#[derive(Parser, Debug)]
#[command(name = "ytscribe")]
#[command(version = "1.0.0")]
#[command(about = "Turn YouTube transcripts into readable PDF documents")]
#[command(long_about = "ytscribe fetches the caption transcript of a YouTube video and renders it as a paginated PDF.

EXAMPLES:
    ytscribe https://www.youtube.com/watch?v=dQw4w9WgXcQ   # Full watch URL
    ytscribe https://youtu.be/dQw4w9WgXcQ                  # Short URL
    ytscribe dQw4w9WgXcQ                                   # Bare video ID
    ytscribe -o ~/Documents dQw4w9WgXcQ                    # Pick the output directory
    ytscribe --log-level debug dQw4w9WgXcQ                 # Verbose logging
    ytscribe completions bash > ytscribe.bash              # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

NOTE:
    The video must have captions available. Videos with disabled captions
    cannot be transcribed.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YouTube video URL or 11-character video ID
    #[arg(value_name = "VIDEO")]
    video: Option<String>,

    /// Output directory for generated documents
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
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

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

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

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ytscribe", &mut std::io::stdout());
            Ok(())
        }
        None => {
            let video = cli
                .video
                .clone()
                .ok_or_else(|| anyhow!("VIDEO is required when no subcommand is specified"))?;
            run_transcribe(&video, cli).await
        }
    }
}

async fn run_transcribe(video: &str, options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config: Config = if FileManager::file_exists(config_path) {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        let config = Config::default();
        let content = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default configuration")?;
        FileManager::write_to_file(config_path, &content)?;
        info!("Created default configuration at {}", config_path);
        config
    };

    // Override config with CLI options if provided
    if let Some(output_dir) = options.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(cmd_log_level) = options.log_level {
        config.log_level = cmd_log_level.into();
    } else {
        log::set_max_level(level_filter(&config.log_level));
    }

    config.validate()?;

    let video_id = video_id::extract_video_id(video).ok_or_else(|| {
        anyhow!("Invalid YouTube URL. Please provide a valid YouTube video link or video ID.")
    })?;
    info!("Extracted video ID: {}", video_id);

    let controller = Controller::new(config);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner.set_message("Checking video...");
    if !controller.video_exists(&video_id).await {
        spinner.finish_and_clear();
        return Err(anyhow!("This video does not exist or is not accessible."));
    }

    spinner.set_message("Processing transcript... This may take a moment.");
    let result = controller.produce_transcript_document(&video_id).await;
    spinner.finish_and_clear();

    match result {
        Ok(document) => {
            println!("Transcript for: {}", document.title);
            println!("{}", document.file_path.display());
            Ok(())
        }
        Err(PipelineError::TranscriptDisabled) => Err(anyhow!(
            "Captions are disabled for this video. Please try a video that has captions enabled."
        )),
        Err(PipelineError::NoTranscript) => Err(anyhow!(
            "No transcript is available for this video. Please try another video."
        )),
        Err(error) => Err(anyhow!(
            "There was an error processing the transcript ({}). Please try again later.",
            error.tag()
        )),
    }
}
