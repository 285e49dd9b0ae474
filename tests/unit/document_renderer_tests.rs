/*!
 * Tests for document layout, file naming and page markers
 */

use anyhow::Result;
use ytscribe::app_config::RenderConfig;
use ytscribe::document_renderer::{page_marker_text, sanitize_title, DocumentRenderer};
use ytscribe::transcript::TranscriptDocument;

use crate::common;

/// Test filename sanitization of punctuation-heavy titles
#[test]
fn test_sanitize_title_withPunctuation_shouldReplaceAndCollapse() {
    assert_eq!(
        sanitize_title("Rust: Fearless Concurrency!! (2024)"),
        "rust_fearless_concurrency_2024"
    );
    assert_eq!(sanitize_title("--Already--Clean--"), "already_clean");
    assert_eq!(sanitize_title("UPPER lower 123"), "upper_lower_123");
}

/// Test filename truncation at fifty characters
#[test]
fn test_sanitize_title_withLongTitle_shouldTruncate() {
    let long_title = "a".repeat(80);
    let sanitized = sanitize_title(&long_title);
    assert_eq!(sanitized.len(), 50);
}

/// Test sanitization of a title with nothing to keep
#[test]
fn test_sanitize_title_withOnlyPunctuation_shouldBeEmpty() {
    assert_eq!(sanitize_title("!!! ??? ..."), "");
}

/// Test that page one carries no marker and later pages do
#[test]
fn test_page_marker_text_withPageNumbers_shouldMarkOnlyLaterPages() {
    assert_eq!(page_marker_text(1), None);
    assert_eq!(page_marker_text(2), Some("- 2 -".to_string()));
    assert_eq!(page_marker_text(7), Some("- 7 -".to_string()));
}

/// Test rendering a short document to disk
/// This test is skipped if no usable system font is present
#[test]
fn test_render_withShortBody_shouldWriteNonEmptyPdf() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let renderer = DocumentRenderer::new(temp_dir.path().join("out"), RenderConfig::default());
    if !renderer.font_available() {
        eprintln!("skipping render test: no usable system font");
        return Ok(());
    }

    let paragraphs = vec!["First paragraph.".to_string(), "Second one.".to_string()];
    let document = renderer.render("A Short Test!", "dQw4w9WgXcQ", &paragraphs)?;

    assert_eq!(document.title, "A Short Test!");
    assert!(document.file_path.ends_with("a_short_test.pdf"));
    assert!(document.file_path.exists());
    assert!(std::fs::metadata(&document.file_path)?.len() > 0);
    Ok(())
}

/// Test that a body long enough for several pages still renders and
/// grows the artifact beyond the single-page version
/// This test is skipped if no usable system font is present
#[test]
fn test_render_withLongBody_shouldPaginate() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = RenderConfig::default();

    let renderer = DocumentRenderer::new(temp_dir.path().join("short"), config.clone());
    if !renderer.font_available() {
        eprintln!("skipping render test: no usable system font");
        return Ok(());
    }

    let short_body = TranscriptDocument::assemble(&common::long_fragments(2)).paragraphs;
    let short_doc = renderer.render("Pagination Check", "dQw4w9WgXcQ", &short_body)?;

    let long_renderer = DocumentRenderer::new(temp_dir.path().join("long"), config);
    let long_body = TranscriptDocument::assemble(&common::long_fragments(120)).paragraphs;
    let long_doc = long_renderer.render("Pagination Check", "dQw4w9WgXcQ", &long_body)?;

    let short_size = std::fs::metadata(&short_doc.file_path)?.len();
    let long_size = std::fs::metadata(&long_doc.file_path)?.len();
    assert!(long_size > short_size);
    Ok(())
}

/// Test that identical sanitized titles land on the same path
#[test]
fn test_render_withIdenticalTitles_shouldReuseSamePath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let renderer = DocumentRenderer::new(temp_dir.path().join("out"), RenderConfig::default());
    if !renderer.font_available() {
        eprintln!("skipping render test: no usable system font");
        return Ok(());
    }

    let paragraphs = vec!["Body.".to_string()];
    let first = renderer.render("Same Title", "dQw4w9WgXcQ", &paragraphs)?;
    let second = renderer.render("same title", "dQw4w9WgXcQ", &paragraphs)?;

    assert_eq!(first.file_path, second.file_path);
    Ok(())
}
