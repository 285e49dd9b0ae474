/*!
 * # ytscribe - YouTube transcripts as paginated PDF documents
 *
 * A Rust library for turning the caption transcript of a YouTube video
 * into a readable, paginated PDF.
 *
 * ## Features
 *
 * - Retrieve caption transcripts with a multi-strategy retry engine
 * - Clean caption noise (HTML entities, bracketed annotations, stray markup)
 * - Heuristic punctuation and capitalization repair
 * - Assemble timed fragments into sentence-terminated paragraphs
 * - Render a paginated PDF with title header and page markers
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `text_normalizer`: Raw caption text cleanup
 * - `grammar_repair`: Ordered rewrite-rule pipeline for punctuation repair
 * - `transcript`: Fragment model and paragraph assembly
 * - `fetcher`: Multi-strategy transcript retrieval
 * - `document_renderer`: Paginated PDF layout
 * - `app_controller`: Pipeline orchestration
 * - `video_id`: Video identifier extraction and validation
 * - `providers`: Upstream transcript/metadata sources:
 *   - `providers::youtube`: Watch-page and oEmbed client
 *   - `providers::mock`: Scripted source for tests
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document_renderer;
pub mod errors;
pub mod fetcher;
pub mod file_utils;
pub mod grammar_repair;
pub mod providers;
pub mod text_normalizer;
pub mod transcript;
pub mod video_id;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document_renderer::{DocumentRenderer, RenderedDocument};
pub use errors::{AppError, FetchError, PipelineError, RenderError};
pub use fetcher::{FetchStrategy, TranscriptFetcher};
pub use transcript::{TranscriptDocument, TranscriptFragment};
