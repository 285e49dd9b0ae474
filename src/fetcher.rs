use std::fmt;

use log::{debug, info};

use crate::errors::FetchError;
use crate::providers::TranscriptSource;
use crate::transcript::TranscriptFragment;

// @module: Multi-strategy transcript retrieval

/// One specific combination of language/region hints sent to the
/// transcript source. Strategies are tried in the order returned by
/// [`FetchStrategy::sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    /// English with a United States region preference
    EnglishUs,
    /// No language or region constraint; the source picks its default
    AnyLanguage,
    /// The en-US dialect tag, which some videos list instead of plain en
    EnglishDialect,
}

impl FetchStrategy {
    /// The fixed attempt order of the retry engine
    pub fn sequence() -> [FetchStrategy; 3] {
        [Self::EnglishUs, Self::AnyLanguage, Self::EnglishDialect]
    }

    /// Language hint for the transcript request, if any
    pub fn language(&self) -> Option<&'static str> {
        match self {
            Self::EnglishUs => Some("en"),
            Self::AnyLanguage => None,
            Self::EnglishDialect => Some("en-US"),
        }
    }

    /// Region hint for the transcript request, if any
    pub fn region(&self) -> Option<&'static str> {
        match self {
            Self::EnglishUs => Some("US"),
            Self::AnyLanguage | Self::EnglishDialect => None,
        }
    }
}

impl fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnglishUs => write!(f, "en/US"),
            Self::AnyLanguage => write!(f, "source default"),
            Self::EnglishDialect => write!(f, "en-US"),
        }
    }
}

// @struct: Outcome of one attempt, kept only to decide continuation
#[derive(Debug)]
struct FetchAttemptRecord {
    attempt: usize,
    strategy: FetchStrategy,
    error: Option<FetchError>,
}

/// Retrieves transcript fragments with a fixed budget of fetch strategies.
///
/// Each attempt uses a different request strategy against the source. A
/// non-empty result terminates immediately. A disabled-captions report is
/// only terminal on the last attempt, since disablement reporting from
/// the source can be strategy-specific. Attempts run sequentially with no
/// backoff.
#[derive(Debug)]
pub struct TranscriptFetcher<S> {
    source: S,
}

impl<S: TranscriptSource> TranscriptFetcher<S> {
    /// Create a fetcher over the given transcript source
    pub fn new(source: S) -> Self {
        TranscriptFetcher { source }
    }

    /// Access the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the transcript of a video, trying every strategy in order.
    ///
    /// # Returns
    /// * `Ok` with a non-empty fragment list on the first strategy that delivers
    /// * `Err(FetchError::CaptionsDisabled)` when the final attempt reports disabled captions
    /// * `Err(FetchError::NoTranscript)` when all strategies come back empty
    /// * any other error of the final attempt, propagated unchanged
    pub async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptFragment>, FetchError> {
        let strategies = FetchStrategy::sequence();
        let budget = strategies.len();

        for (index, strategy) in strategies.iter().enumerate() {
            let attempt = index + 1;
            info!(
                "Attempt {}/{} to fetch transcript for video {} (strategy: {})",
                attempt, budget, video_id, strategy
            );

            let record = match self.source.fetch_fragments(video_id, strategy).await {
                Ok(fragments) if !fragments.is_empty() => {
                    info!(
                        "Fetched {} transcript fragments on attempt {}",
                        fragments.len(),
                        attempt
                    );
                    return Ok(fragments);
                }
                Ok(_) => FetchAttemptRecord {
                    attempt,
                    strategy: *strategy,
                    error: None,
                },
                Err(error) => FetchAttemptRecord {
                    attempt,
                    strategy: *strategy,
                    error: Some(error),
                },
            };

            debug!(
                "Attempt {} ({}) produced no transcript: {:?}",
                record.attempt, record.strategy, record.error
            );

            if attempt == budget {
                match record.error {
                    // Disabled reports are only trusted once every strategy agreed
                    Some(FetchError::CaptionsDisabled) => {
                        return Err(FetchError::CaptionsDisabled)
                    }
                    Some(error) => return Err(error),
                    None => {}
                }
            }
        }

        Err(FetchError::NoTranscript)
    }
}
