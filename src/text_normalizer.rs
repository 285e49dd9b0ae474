use once_cell::sync::Lazy;
use regex::Regex;

// @module: Raw caption text cleanup

// @const: Bracketed annotation spans like [Music] or [Applause]
static BRACKET_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").unwrap());

// @const: Runs of whitespace, including newlines from the caption source
static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// @const: Everything outside word characters, whitespace and basic punctuation.
// Ampersands stay so decoded &amp; entities survive the filter.
static DISALLOWED_CHAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s.,!?'"()&-]"#).unwrap());

/// The fixed set of HTML entities the caption source is known to emit.
/// Decoded in declaration order; `&amp;` first so the others see literal text.
const HTML_ENTITIES: [(&str, &str); 6] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&nbsp;", " "),
];

/// Clean one raw caption fragment for assembly.
///
/// Decodes the known HTML entities, removes bracketed annotation spans,
/// collapses whitespace runs to a single space, drops characters outside
/// the allowed set and trims the result. Pure and idempotent; an empty
/// input yields an empty string.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_string();
    for (entity, literal) in HTML_ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, literal);
        }
    }

    // Dropping disallowed characters first keeps the whitespace collapse
    // final, so cleaning twice changes nothing
    let text = BRACKET_SPAN_REGEX.replace_all(&text, "");
    let text = DISALLOWED_CHAR_REGEX.replace_all(&text, "");
    let text = WHITESPACE_RUN_REGEX.replace_all(&text, " ");

    text.trim().to_string()
}
