use log::{debug, error, info};

use crate::app_config::Config;
use crate::document_renderer::{DocumentRenderer, RenderedDocument};
use crate::errors::PipelineError;
use crate::fetcher::TranscriptFetcher;
use crate::providers::youtube::YouTube;
use crate::providers::{MetadataSource, TranscriptSource};
use crate::text_normalizer;
use crate::transcript::TranscriptDocument;

// @module: Pipeline orchestration for transcript documents

/// Main application controller sequencing fetch, assembly and rendering.
///
/// The controller maps internal failures onto the stable
/// [`PipelineError`] taxonomy and performs no retries of its own; the
/// fetch-strategy budget lives entirely inside the fetcher.
pub struct Controller<S> {
    // @field: App configuration
    config: Config,

    // @field: Retry engine over the upstream transcript source
    fetcher: TranscriptFetcher<S>,
}

impl Controller<YouTube> {
    /// Create a controller against the real transcript source
    pub fn new(config: Config) -> Self {
        let source = YouTube::new(config.fetch.user_agent.clone(), config.fetch.timeout_secs);
        Self::with_source(config, source)
    }
}

impl<S: TranscriptSource + MetadataSource> Controller<S> {
    /// Create a controller with a custom source - used by tests
    pub fn with_source(config: Config, source: S) -> Self {
        Controller {
            config,
            fetcher: TranscriptFetcher::new(source),
        }
    }

    /// Check whether the video exists and is accessible
    pub async fn video_exists(&self, video_id: &str) -> bool {
        self.fetcher.source().video_title(video_id).await.is_ok()
    }

    /// Produce a rendered transcript document for the given video.
    ///
    /// Composes fetcher, assembler, metadata lookup and renderer. The
    /// disabled/no-transcript classifications of the fetcher pass through
    /// unchanged; every other internal failure collapses into the
    /// processing or I/O tags.
    pub async fn produce_transcript_document(
        &self,
        video_id: &str,
    ) -> Result<RenderedDocument, PipelineError> {
        info!("Processing transcript for video {}", video_id);

        let fragments = self.fetcher.fetch(video_id).await.map_err(|e| {
            error!("Transcript fetch failed for {}: {}", video_id, e);
            PipelineError::from(e)
        })?;

        let document = TranscriptDocument::assemble(&fragments);
        if document.is_empty() {
            error!(
                "Assembly of {} fragments produced no paragraphs for {}",
                fragments.len(),
                video_id
            );
            return Err(PipelineError::Processing);
        }
        debug!(
            "Assembled {} paragraphs from {} fragments",
            document.paragraphs.len(),
            fragments.len()
        );

        let raw_title = self.fetcher.source().video_title(video_id).await.map_err(|e| {
            error!("Metadata lookup failed for {}: {}", video_id, e);
            PipelineError::Processing
        })?;
        let title = text_normalizer::normalize(&raw_title);
        if title.is_empty() {
            error!("Video {} has no usable title", video_id);
            return Err(PipelineError::Processing);
        }

        let renderer = DocumentRenderer::new(
            self.config.output_dir.clone(),
            self.config.render.clone(),
        );
        let rendered = renderer
            .render(&title, video_id, &document.paragraphs)
            .map_err(|e| {
                error!("Document rendering failed for {}: {}", video_id, e);
                PipelineError::from(e)
            })?;

        info!(
            "Transcript document ready for {} at {:?}",
            video_id, rendered.file_path
        );
        Ok(rendered)
    }
}

impl<S> std::fmt::Debug for Controller<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("output_dir", &self.config.output_dir)
            .finish()
    }
}
