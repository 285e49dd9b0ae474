use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::FetchError;
use crate::fetcher::FetchStrategy;
use crate::providers::{MetadataSource, TranscriptSource};
use crate::transcript::TranscriptFragment;

// @const: One timed caption entry in a timedtext XML payload
static TIMEDTEXT_ENTRY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<text start="([\d.]+)" dur="([\d.]+)"[^>]*>(.*?)</text>"#).unwrap()
});

// @const: Inline markup inside a caption entry
static MARKUP_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// YouTube transcript and metadata client.
///
/// Captions are scraped from the watch page: the page embeds a caption
/// track list whose entries point at timedtext XML documents. Titles and
/// existence checks go through the public oEmbed endpoint.
#[derive(Debug)]
pub struct YouTube {
    /// Base URL of the video site, overridable for tests
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

/// JSON wrapper around the caption track list on the watch page
#[derive(Debug, Deserialize)]
struct CaptionsWrapper {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
struct TracklistRenderer {
    #[serde(rename = "captionTracks", default)]
    caption_tracks: Vec<CaptionTrack>,
}

/// One caption track advertised by the watch page
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionTrack {
    /// URL of the timedtext document for this track
    #[serde(rename = "baseUrl")]
    pub base_url: String,

    /// BCP-47 style language tag of the track
    #[serde(rename = "languageCode")]
    pub language_code: String,
}

/// oEmbed metadata payload; only the title is of interest
#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: String,
}

impl YouTube {
    /// Create a new client with the given user agent and request timeout
    pub fn new(user_agent: impl Into<String>, timeout_secs: u64) -> Self {
        YouTube {
            base_url: "https://www.youtube.com".to_string(),
            client: Client::builder()
                .user_agent(user_agent.into())
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Create a client against a different base URL - used by tests
    pub fn from_url(url: impl Into<String>) -> Self {
        YouTube {
            base_url: url.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Download the watch page of a video, carrying the strategy's
    /// language/region hints as an Accept-Language preference
    async fn watch_page(
        &self,
        video_id: &str,
        strategy: &FetchStrategy,
    ) -> Result<String, FetchError> {
        let url = format!("{}/watch?v={}", self.base_url, video_id);

        let mut request = self.client.get(&url);
        let accept_language = match (strategy.language(), strategy.region()) {
            (Some(language), Some(region)) => {
                Some(format!("{}-{},{};q=0.9", language, region, language))
            }
            (Some(language), None) => Some(language.to_string()),
            (None, _) => None,
        };
        if let Some(accept_language) = accept_language {
            request = request.header("Accept-Language", accept_language);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed(format!(
                "video page request returned {}",
                status
            )));
        }

        Ok(response.text().await?)
    }

    /// Extract the caption track list from a watch page body.
    ///
    /// A page without a captions section is classified: recaptcha markers
    /// mean the source is rate limiting us, a missing playability status
    /// means the page did not load as a video, and an otherwise playable
    /// page without captions means captions are disabled for the video.
    fn caption_tracks(video_id: &str, page_body: &str) -> Result<Vec<CaptionTrack>, FetchError> {
        let Some((_, after_marker)) = page_body.split_once("\"captions\":") else {
            if page_body.contains("class=\"g-recaptcha\"") {
                return Err(FetchError::RequestFailed(
                    "the transcript source is rate limiting this client".to_string(),
                ));
            }
            if !page_body.contains("\"playabilityStatus\":") {
                return Err(FetchError::RequestFailed(format!(
                    "watch page did not load as a video for {}",
                    video_id
                )));
            }
            return Err(FetchError::CaptionsDisabled);
        };

        let json_blob = after_marker
            .split(",\"videoDetails")
            .next()
            .unwrap_or(after_marker)
            .replace('\n', "");

        let wrapper: CaptionsWrapper = serde_json::from_str(&json_blob)
            .map_err(|e| FetchError::ParseError(format!("caption track list: {}", e)))?;

        match wrapper.renderer {
            Some(renderer) => Ok(renderer.caption_tracks),
            None => Err(FetchError::CaptionsDisabled),
        }
    }

    /// Pick the track matching the strategy's language hint.
    ///
    /// Exact tag match wins; a track sharing the primary subtag (en for
    /// en-US) is accepted as a fallback. Without a hint the first track
    /// is taken, mirroring the source's own default ordering.
    fn select_track<'a>(
        tracks: &'a [CaptionTrack],
        strategy: &FetchStrategy,
    ) -> Option<&'a CaptionTrack> {
        let Some(language) = strategy.language() else {
            return tracks.first();
        };

        if let Some(track) = tracks
            .iter()
            .find(|t| t.language_code.eq_ignore_ascii_case(language))
        {
            return Some(track);
        }

        let primary = language.split('-').next().unwrap_or(language);
        tracks.iter().find(|t| {
            t.language_code
                .split('-')
                .next()
                .map(|p| p.eq_ignore_ascii_case(primary))
                .unwrap_or(false)
        })
    }

    /// Download the timedtext document of a caption track
    async fn timedtext(&self, track_url: &str) -> Result<String, FetchError> {
        let response = self.client.get(track_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed(format!(
                "timedtext request returned {}",
                status
            )));
        }
        Ok(response.text().await?)
    }

    /// Parse a timedtext XML document into ordered fragments.
    ///
    /// Inline markup is dropped; entity decoding is left to the
    /// normalization pass of the assembler.
    fn parse_timedtext(xml: &str) -> Vec<TranscriptFragment> {
        TIMEDTEXT_ENTRY_REGEX
            .captures_iter(xml)
            .filter_map(|caps| {
                let start_secs = caps[1].parse::<f64>().ok()?;
                let duration_secs = caps[2].parse::<f64>().ok()?;
                let text = MARKUP_TAG_REGEX.replace_all(&caps[3], "");
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                Some(TranscriptFragment::new(text, start_secs, duration_secs))
            })
            .collect()
    }
}

#[async_trait]
impl TranscriptSource for YouTube {
    async fn fetch_fragments(
        &self,
        video_id: &str,
        strategy: &FetchStrategy,
    ) -> Result<Vec<TranscriptFragment>, FetchError> {
        let page_body = self.watch_page(video_id, strategy).await?;
        let tracks = Self::caption_tracks(video_id, &page_body)?;

        let Some(track) = Self::select_track(&tracks, strategy) else {
            debug!(
                "No caption track matches strategy {} for video {} ({} tracks advertised)",
                strategy,
                video_id,
                tracks.len()
            );
            return Ok(Vec::new());
        };

        let xml = self.timedtext(&track.base_url).await?;
        Ok(Self::parse_timedtext(&xml))
    }
}

#[async_trait]
impl MetadataSource for YouTube {
    async fn video_title(&self, video_id: &str) -> Result<String, FetchError> {
        let url = format!(
            "{}/oembed?format=json&url={}/watch?v={}",
            self.base_url, self.base_url, video_id
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed(format!(
                "metadata request returned {}",
                status
            )));
        }

        let metadata: OEmbedResponse = response
            .json()
            .await
            .map_err(|e| FetchError::ParseError(format!("oEmbed payload: {}", e)))?;

        Ok(metadata.title)
    }
}
