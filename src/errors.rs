/*!
 * Error types for the ytscribe application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching a transcript from the remote source
#[derive(Error, Debug)]
pub enum FetchError {
    /// Captions are turned off for the requested video
    #[error("captions are disabled for this video")]
    CaptionsDisabled,

    /// No transcript could be obtained after exhausting every fetch strategy
    #[error("no transcript is available for this video")]
    NoTranscript,

    /// Error when making a request to the transcript source fails
    #[error("transcript request failed: {0}")]
    RequestFailed(String),

    /// Error when interpreting a response from the transcript source fails
    #[error("failed to parse transcript response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailed(error.to_string())
    }
}

/// Errors that can occur while rendering the transcript document
#[derive(Error, Debug)]
pub enum RenderError {
    /// No usable font could be located on this system
    #[error("no usable font found (searched {searched} locations)")]
    NoFont {
        /// Number of font locations that were tried
        searched: usize,
    },

    /// Error from a filesystem operation on the output artifact
    #[error("failed to write document {path}: {source}")]
    Io {
        /// Path of the artifact being written
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Terminal pipeline error exposed to callers of the orchestrator.
///
/// Variants are stable tags, not formatted messages, so callers can
/// branch on them reliably.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Captions turned off for the video; user-facing, not retried further
    #[error("TRANSCRIPT_DISABLED")]
    TranscriptDisabled,

    /// No transcript obtainable after exhausting all fetch strategies
    #[error("NO_TRANSCRIPT")]
    NoTranscript,

    /// Local document-write failure
    #[error("IO_ERROR")]
    Io,

    /// Catch-all for any other internal fault
    #[error("PROCESSING_ERROR")]
    Processing,
}

impl PipelineError {
    /// Stable tag for this error, suitable for caller-side branching
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TranscriptDisabled => "TRANSCRIPT_DISABLED",
            Self::NoTranscript => "NO_TRANSCRIPT",
            Self::Io => "IO_ERROR",
            Self::Processing => "PROCESSING_ERROR",
        }
    }
}

impl From<FetchError> for PipelineError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::CaptionsDisabled => Self::TranscriptDisabled,
            FetchError::NoTranscript => Self::NoTranscript,
            FetchError::RequestFailed(_) | FetchError::ParseError(_) => Self::Processing,
        }
    }
}

impl From<RenderError> for PipelineError {
    fn from(error: RenderError) -> Self {
        match error {
            RenderError::Io { .. } => Self::Io,
            RenderError::NoFont { .. } => Self::Processing,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the transcript fetcher
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error from the document renderer
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Terminal pipeline error
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
