/*!
 * Common test utilities for the ytscribe test suite
 */

use anyhow::Result;
use tempfile::TempDir;
use ytscribe::transcript::TranscriptFragment;

/// Creates a temporary directory for test output
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Two short caption fragments without sentence terminators
pub fn sample_fragments() -> Vec<TranscriptFragment> {
    vec![
        TranscriptFragment::new("hello world", 0.0, 2.0),
        TranscriptFragment::new("this is great", 2.0, 2.5),
    ]
}

/// A fragment sequence long enough to force multiple output pages
pub fn long_fragments(sentences: usize) -> Vec<TranscriptFragment> {
    (0..sentences)
        .map(|i| {
            TranscriptFragment::new(
                format!(
                    "sentence number {} keeps the body of the document growing steadily onward.",
                    i
                ),
                i as f64 * 3.0,
                3.0,
            )
        })
        .collect()
}
