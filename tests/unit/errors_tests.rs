/*!
 * Tests for error types, conversions and stable tags
 */

use ytscribe::errors::{AppError, FetchError, PipelineError, RenderError};

#[test]
fn test_fetchError_requestFailed_shouldDisplayCorrectly() {
    let error = FetchError::RequestFailed("Connection timeout".to_string());
    let display = format!("{}", error);
    assert!(display.contains("transcript request failed"));
    assert!(display.contains("Connection timeout"));
}

#[test]
fn test_fetchError_parseError_shouldDisplayCorrectly() {
    let error = FetchError::ParseError("Invalid JSON".to_string());
    let display = format!("{}", error);
    assert!(display.contains("failed to parse transcript response"));
    assert!(display.contains("Invalid JSON"));
}

#[test]
fn test_pipelineError_tags_shouldBeStable() {
    assert_eq!(PipelineError::TranscriptDisabled.tag(), "TRANSCRIPT_DISABLED");
    assert_eq!(PipelineError::NoTranscript.tag(), "NO_TRANSCRIPT");
    assert_eq!(PipelineError::Io.tag(), "IO_ERROR");
    assert_eq!(PipelineError::Processing.tag(), "PROCESSING_ERROR");
}

#[test]
fn test_pipelineError_display_shouldMatchTag() {
    for error in [
        PipelineError::TranscriptDisabled,
        PipelineError::NoTranscript,
        PipelineError::Io,
        PipelineError::Processing,
    ] {
        assert_eq!(format!("{}", error), error.tag());
    }
}

#[test]
fn test_pipelineError_fromFetchError_shouldMapUserFacingTagsThrough() {
    let disabled: PipelineError = FetchError::CaptionsDisabled.into();
    assert!(matches!(disabled, PipelineError::TranscriptDisabled));

    let missing: PipelineError = FetchError::NoTranscript.into();
    assert!(matches!(missing, PipelineError::NoTranscript));
}

#[test]
fn test_pipelineError_fromFetchError_shouldCollapseInternalFaults() {
    let request: PipelineError = FetchError::RequestFailed("x".to_string()).into();
    assert!(matches!(request, PipelineError::Processing));

    let parse: PipelineError = FetchError::ParseError("x".to_string()).into();
    assert!(matches!(parse, PipelineError::Processing));
}

#[test]
fn test_pipelineError_fromRenderError_shouldMapIoAndFont() {
    let io_error = RenderError::Io {
        path: "out.pdf".into(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let mapped: PipelineError = io_error.into();
    assert!(matches!(mapped, PipelineError::Io));

    let font: PipelineError = RenderError::NoFont { searched: 18 }.into();
    assert!(matches!(font, PipelineError::Processing));
}

#[test]
fn test_renderError_io_shouldDisplayPathAndSource() {
    let error = RenderError::Io {
        path: "scratch/out.pdf".into(),
        source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
    };
    let display = format!("{}", error);
    assert!(display.contains("scratch/out.pdf"));
    assert!(display.contains("disk full"));
}

#[test]
fn test_appError_fromFetchError_shouldWrapCorrectly() {
    let fetch_error = FetchError::CaptionsDisabled;
    let app_error: AppError = fetch_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Fetch error"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhowError_shouldWrapAsUnknown() {
    let anyhow_error = anyhow::anyhow!("Something went wrong");
    let app_error: AppError = anyhow_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Something went wrong"));
}

#[test]
fn test_fetchError_debug_shouldBeImplemented() {
    let error = FetchError::CaptionsDisabled;
    let debug = format!("{:?}", error);
    assert!(debug.contains("CaptionsDisabled"));
}
