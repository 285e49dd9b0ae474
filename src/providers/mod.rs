/*!
 * Source implementations for transcript and metadata retrieval.
 *
 * This module contains the upstream seams of the pipeline:
 * - YouTube: watch-page caption scraping and the oEmbed metadata endpoint
 * - Mock: scripted source for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::FetchError;
use crate::fetcher::FetchStrategy;
use crate::transcript::TranscriptFragment;

/// Upstream service that serves timed caption fragments for a video.
///
/// The retry engine drives implementations of this trait; one call
/// corresponds to one fetch attempt under one strategy.
#[async_trait]
pub trait TranscriptSource: Send + Sync + Debug {
    /// Fetch the caption fragments of a video under the given strategy
    ///
    /// # Arguments
    /// * `video_id` - Validated 11-character video identifier
    /// * `strategy` - Language/region hints for this attempt
    ///
    /// # Returns
    /// * `Result<Vec<TranscriptFragment>, FetchError>` - Chronologically ordered
    ///   fragments; an empty vector when the source has no matching track
    async fn fetch_fragments(
        &self,
        video_id: &str,
        strategy: &FetchStrategy,
    ) -> Result<Vec<TranscriptFragment>, FetchError>;
}

/// Upstream oracle answering metadata questions about a video
#[async_trait]
pub trait MetadataSource: Send + Sync + Debug {
    /// Title of the video, or an error when the video is not accessible
    async fn video_title(&self, video_id: &str) -> Result<String, FetchError>;
}

pub mod mock;
pub mod youtube;
