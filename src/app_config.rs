use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Scratch directory for generated document artifacts
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Transcript fetching config
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Document rendering config
    #[serde(default)]
    pub render: RenderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the transcript source client
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FetchConfig {
    // @field: Timeout per remote call in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: User agent presented to the transcript source
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Settings for the paginated document layout
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RenderConfig {
    // @field: Directory searched for fonts before the built-in locations
    #[serde(default)]
    pub font_dir: Option<PathBuf>,

    // @field: Body text size in points
    #[serde(default = "default_body_font_size")]
    pub body_font_size: u8,

    // @field: Title size in points
    #[serde(default = "default_title_font_size")]
    pub title_font_size: u8,

    // @field: Page margins in millimeters
    #[serde(default = "default_margin_mm")]
    pub margin_mm: f64,

    // @field: Left indent of body paragraphs in millimeters
    #[serde(default = "default_indent_mm")]
    pub indent_mm: f64,

    // @field: Line spacing multiplier for body text
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_dir: None,
            body_font_size: default_body_font_size(),
            title_font_size: default_title_font_size(),
            margin_mm: default_margin_mm(),
            indent_mm: default_indent_mm(),
            line_spacing: default_line_spacing(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_output_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("ytscribe"))
        .unwrap_or_else(|| PathBuf::from("temp"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    // A browser user agent; the watch page serves a reduced document to
    // unknown clients
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36".to_string()
}

fn default_body_font_size() -> u8 {
    12
}

fn default_title_font_size() -> u8 {
    20
}

fn default_margin_mm() -> f64 {
    17.5
}

fn default_indent_mm() -> f64 {
    7.0
}

fn default_line_spacing() -> f64 {
    1.2
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.fetch.timeout_secs == 0 {
            return Err(anyhow!("Fetch timeout must be at least one second"));
        }

        if self.render.body_font_size == 0 || self.render.title_font_size == 0 {
            return Err(anyhow!("Font sizes must be non-zero"));
        }

        if self.render.margin_mm < 0.0 || self.render.indent_mm < 0.0 {
            return Err(anyhow!("Page metrics must not be negative"));
        }

        if self.render.line_spacing <= 0.0 {
            return Err(anyhow!("Line spacing must be positive"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            fetch: FetchConfig::default(),
            render: RenderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
