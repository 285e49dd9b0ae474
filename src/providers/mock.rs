/*!
 * Mock source implementations for testing.
 *
 * This module provides a scripted transcript source that simulates the
 * behaviors the retry engine has to handle:
 * - `MockSource::working(...)` - delivers fragments on the first attempt
 * - `MockSource::empty()` - always comes back empty
 * - `MockSource::disabled()` - always reports disabled captions
 * - `MockSource::with_outcomes(...)` - one scripted outcome per attempt
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::errors::FetchError;
use crate::fetcher::FetchStrategy;
use crate::providers::{MetadataSource, TranscriptSource};
use crate::transcript::TranscriptFragment;

/// Outcome of one scripted fetch attempt
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Deliver these fragments
    Fragments(Vec<TranscriptFragment>),
    /// Deliver an empty fragment list
    Empty,
    /// Report captions as disabled
    Disabled,
    /// Fail with a request error
    RequestFailure(String),
}

/// Scripted transcript/metadata source for testing retry behavior.
///
/// Outcomes are consumed one per attempt; when the script runs out, the
/// last outcome repeats. Every call is counted and the strategy it
/// carried is recorded.
#[derive(Debug)]
pub struct MockSource {
    outcomes: Vec<MockOutcome>,
    title: String,
    call_count: AtomicUsize,
    strategies_seen: Mutex<Vec<FetchStrategy>>,
}

impl MockSource {
    /// Create a source that plays back the given outcomes in order
    pub fn with_outcomes(outcomes: Vec<MockOutcome>) -> Self {
        MockSource {
            outcomes,
            title: "Mock Video".to_string(),
            call_count: AtomicUsize::new(0),
            strategies_seen: Mutex::new(Vec::new()),
        }
    }

    /// Source that delivers the given fragments on every attempt
    pub fn working(fragments: Vec<TranscriptFragment>) -> Self {
        Self::with_outcomes(vec![MockOutcome::Fragments(fragments)])
    }

    /// Source that always comes back empty
    pub fn empty() -> Self {
        Self::with_outcomes(vec![MockOutcome::Empty])
    }

    /// Source that always reports disabled captions
    pub fn disabled() -> Self {
        Self::with_outcomes(vec![MockOutcome::Disabled])
    }

    /// Set the title reported by the metadata side of the mock
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Number of fetch attempts this source has served
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The strategies of every served attempt, in call order
    pub fn strategies_seen(&self) -> Vec<FetchStrategy> {
        self.strategies_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptSource for MockSource {
    async fn fetch_fragments(
        &self,
        _video_id: &str,
        strategy: &FetchStrategy,
    ) -> Result<Vec<TranscriptFragment>, FetchError> {
        let index = self.call_count.fetch_add(1, Ordering::SeqCst);
        self.strategies_seen.lock().unwrap().push(*strategy);

        let outcome = self
            .outcomes
            .get(index)
            .or_else(|| self.outcomes.last())
            .cloned()
            .unwrap_or(MockOutcome::Empty);

        match outcome {
            MockOutcome::Fragments(fragments) => Ok(fragments),
            MockOutcome::Empty => Ok(Vec::new()),
            MockOutcome::Disabled => Err(FetchError::CaptionsDisabled),
            MockOutcome::RequestFailure(message) => Err(FetchError::RequestFailed(message)),
        }
    }
}

#[async_trait]
impl MetadataSource for MockSource {
    async fn video_title(&self, _video_id: &str) -> Result<String, FetchError> {
        Ok(self.title.clone())
    }
}
