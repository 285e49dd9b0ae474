/*!
 * Tests for fragment modeling and paragraph assembly
 */

use ytscribe::transcript::{TranscriptDocument, TranscriptFragment};

use crate::common;

/// Test fragment construction and derived timing
#[test]
fn test_fragment_properties_withValidFragment_shouldHaveCorrectValues() {
    let fragment = TranscriptFragment::new("Hello world", 1.5, 2.5);

    assert_eq!(fragment.text, "Hello world");
    assert!((fragment.start_secs - 1.5).abs() < f64::EPSILON);
    assert!((fragment.end_secs() - 4.0).abs() < f64::EPSILON);
}

/// Test validated construction rejects bad input
#[test]
fn test_fragment_new_validated_withBadInput_shouldReject() {
    assert!(TranscriptFragment::new_validated("text", -1.0, 2.0).is_err());
    assert!(TranscriptFragment::new_validated("text", 0.0, -2.0).is_err());
    assert!(TranscriptFragment::new_validated("   ", 0.0, 2.0).is_err());

    let fragment = TranscriptFragment::new_validated("  padded  ", 0.0, 2.0).unwrap();
    assert_eq!(fragment.text, "padded");
}

/// Test assembly of an empty fragment sequence
#[test]
fn test_assemble_withNoFragments_shouldProduceNoParagraphs() {
    let document = TranscriptDocument::assemble(&[]);
    assert!(document.is_empty());
    assert_eq!(document.paragraphs.len(), 0);
    assert_eq!(document.joined(), "");
}

/// Test assembly of fragments without any sentence terminator
#[test]
fn test_assemble_withUnterminatedFragments_shouldCloseFinalParagraph() {
    let document = TranscriptDocument::assemble(&common::sample_fragments());

    assert_eq!(document.paragraphs.len(), 1);
    assert_eq!(document.paragraphs[0], "Hello world this is great.");
}

/// Test that a terminator mid-stream splits paragraphs
#[test]
fn test_assemble_withTerminatorMidStream_shouldEmitSeparateParagraphs() {
    let fragments = vec![
        TranscriptFragment::new("first part.", 0.0, 2.0),
        TranscriptFragment::new("second bit", 2.0, 2.0),
    ];

    let document = TranscriptDocument::assemble(&fragments);

    assert_eq!(document.paragraphs.len(), 2);
    assert_eq!(document.paragraphs[0], "First part.");
    assert_eq!(document.paragraphs[1], "Second bit.");
}

/// Test that fragments normalizing to nothing are skipped
#[test]
fn test_assemble_withNoiseOnlyFragment_shouldSkipIt() {
    let fragments = vec![
        TranscriptFragment::new("[Music]", 0.0, 1.0),
        TranscriptFragment::new("hello.", 1.0, 1.0),
    ];

    let document = TranscriptDocument::assemble(&fragments);

    assert_eq!(document.paragraphs.len(), 1);
    assert_eq!(document.paragraphs[0], "Hello.");
}

/// Test the sentence termination guarantee on a mixed sequence
#[test]
fn test_assemble_withMixedFragments_shouldTerminateEveryParagraph() {
    let fragments = vec![
        TranscriptFragment::new("hello there!", 0.0, 1.0),
        TranscriptFragment::new("um [Music]", 1.0, 1.0),
        TranscriptFragment::new("so basically", 2.0, 1.0),
        TranscriptFragment::new("we tried it.", 3.0, 1.0),
        TranscriptFragment::new("the end", 4.0, 1.0),
    ];

    let document = TranscriptDocument::assemble(&fragments);

    assert_eq!(document.paragraphs.len(), 3);
    for paragraph in &document.paragraphs {
        assert!(!paragraph.is_empty());
        assert!(
            paragraph.ends_with(['.', '!', '?']),
            "unterminated paragraph: {:?}",
            paragraph
        );
    }
}

/// Test that joined output separates paragraphs with a blank line
#[test]
fn test_joined_withTwoParagraphs_shouldSeparateWithBlankLine() {
    let fragments = vec![
        TranscriptFragment::new("one.", 0.0, 1.0),
        TranscriptFragment::new("two.", 1.0, 1.0),
    ];

    let document = TranscriptDocument::assemble(&fragments);
    assert_eq!(document.joined(), "One.\n\nTwo.");
}
