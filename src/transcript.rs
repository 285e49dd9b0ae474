use anyhow::{anyhow, Result};

use crate::grammar_repair;
use crate::text_normalizer;

// @module: Transcript fragments and paragraph assembly

// @struct: Single timed caption fragment
#[derive(Debug, Clone)]
pub struct TranscriptFragment {
    // @field: Caption text as returned by the source
    pub text: String,

    // @field: Offset of the fragment in the video, in seconds
    pub start_secs: f64,

    // @field: Display duration in seconds
    pub duration_secs: f64,
}

impl TranscriptFragment {
    /// Creates a new fragment - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(text: impl Into<String>, start_secs: f64, duration_secs: f64) -> Self {
        TranscriptFragment {
            text: text.into(),
            start_secs,
            duration_secs,
        }
    }

    // @creates: Validated fragment
    // @validates: Non-negative timing and non-empty text
    pub fn new_validated(
        text: impl Into<String>,
        start_secs: f64,
        duration_secs: f64,
    ) -> Result<Self> {
        if start_secs < 0.0 || duration_secs < 0.0 {
            return Err(anyhow!(
                "Invalid fragment timing: start {} duration {}",
                start_secs,
                duration_secs
            ));
        }

        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("Empty fragment text at offset {}", start_secs));
        }

        Ok(TranscriptFragment {
            text: trimmed.to_string(),
            start_secs,
            duration_secs,
        })
    }

    /// Offset at which the fragment leaves the screen
    pub fn end_secs(&self) -> f64 {
        self.start_secs + self.duration_secs
    }
}

/// Assembled transcript: ordered, sentence-terminated paragraphs.
///
/// Built once per fetch cycle and immutable afterwards; the renderer
/// consumes it exactly once.
#[derive(Debug, Default)]
pub struct TranscriptDocument {
    /// Grammar-repaired paragraphs in reading order
    pub paragraphs: Vec<String>,
}

impl TranscriptDocument {
    /// Assemble caption fragments into repaired paragraphs.
    ///
    /// Fragments are normalized and appended to an accumulator; whenever
    /// the accumulator ends with sentence-terminating punctuation it is
    /// repaired and emitted as one paragraph. Text left over after the
    /// last fragment gets a terminal period. A closing repair pass over
    /// the joined output catches punctuation defects that only show up
    /// across paragraph boundaries.
    pub fn assemble(fragments: &[TranscriptFragment]) -> Self {
        let mut paragraphs: Vec<String> = Vec::new();
        let mut accumulator = String::new();

        for fragment in fragments {
            let cleaned = text_normalizer::normalize(&fragment.text);
            if cleaned.is_empty() {
                continue;
            }

            accumulator.push(' ');
            accumulator.push_str(&cleaned);

            let current = accumulator.trim();
            if current.ends_with(['.', '!', '?']) {
                paragraphs.push(grammar_repair::repair(current));
                accumulator.clear();
            }
        }

        // Whatever remains never saw a sentence terminator
        let residue = accumulator.trim();
        if !residue.is_empty() {
            let closed = format!("{}.", residue);
            paragraphs.push(grammar_repair::repair(&closed));
        }

        if paragraphs.is_empty() {
            return TranscriptDocument::default();
        }

        let joined = grammar_repair::repair(&paragraphs.join("\n\n"));
        let paragraphs = joined
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();

        TranscriptDocument { paragraphs }
    }

    /// True when assembly produced no paragraphs
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Paragraphs joined with a blank line
    pub fn joined(&self) -> String {
        self.paragraphs.join("\n\n")
    }
}
