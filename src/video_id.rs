use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

// @module: Video identifier extraction and validation

// @const: The 11-character video identifier token
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

/// True when the token is a well-formed 11-character video identifier
pub fn is_valid_video_id(token: &str) -> bool {
    VIDEO_ID_REGEX.is_match(token)
}

/// Extract the video identifier from user input.
///
/// Accepts a bare identifier as well as the common URL shapes:
/// `youtube.com/watch?v=ID`, `youtu.be/ID`, `youtube.com/embed/ID`,
/// `youtube.com/v/ID`, `youtube.com/shorts/ID` and `youtube.com/live/ID`.
/// A scheme-less URL is tolerated.
pub fn extract_video_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if is_valid_video_id(trimmed) {
        return Some(trimmed.to_string());
    }

    let parsed = Url::parse(trimmed)
        .or_else(|_| Url::parse(&format!("https://{}", trimmed)))
        .ok()?;
    let host = parsed.host_str()?;

    let candidate = if host == "youtu.be" || host.ends_with(".youtu.be") {
        parsed.path_segments()?.next().map(str::to_string)
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        if parsed.path() == "/watch" {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())
        } else {
            let mut segments = parsed.path_segments()?;
            match segments.next()? {
                "embed" | "v" | "shorts" | "live" => segments.next().map(str::to_string),
                _ => None,
            }
        }
    } else {
        None
    }?;

    if is_valid_video_id(&candidate) {
        Some(candidate)
    } else {
        None
    }
}
