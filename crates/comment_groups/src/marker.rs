// crates/comment_groups/src/marker.rs

use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    #[error("marker must not be empty")]
    Empty,
    #[error("invalid marker pattern: {0}")]
    Invalid(#[from] regex::Error),
}

/// The token a comment group must contain to be extracted.
///
/// Three patterns are derived from the marker, each allowing spaces or tabs
/// in front of it:
///   - `presence`: the marker anywhere in the text
///   - `block_body`: the marker plus at least one character, lazily, up to
///     the next `*/`
///   - `post_marker`: the marker, any tabs, then exactly one more character
///     (newline included); extracted text starts after this match
#[derive(Debug, Clone)]
pub struct Marker {
    text: String,
    presence: Regex,
    block_body: Regex,
    post_marker: Regex,
}

impl Marker {
    /// Matches `marker` literally; regex metacharacters are escaped.
    pub fn literal(marker: &str) -> Result<Self, MarkerError> {
        Self::build(marker, &regex::escape(marker))
    }

    /// Treats `marker` as a regular expression.
    pub fn regex(marker: &str) -> Result<Self, MarkerError> {
        Self::build(marker, marker)
    }

    fn build(marker: &str, source: &str) -> Result<Self, MarkerError> {
        if marker.is_empty() {
            return Err(MarkerError::Empty);
        }
        let presence = Regex::new(&format!(r"[ \t]*(?:{})", source))?;
        let block_body = Regex::new(&format!(r"(?s)(?P<body>[ \t]*(?:{}).+?)\*/", source))?;
        let post_marker = Regex::new(&format!(r"(?s)[ \t]*(?:{})\t*.", source))?;
        Ok(Self {
            text: marker.to_string(),
            presence,
            block_body,
            post_marker,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_in(&self, text: &str) -> bool {
        self.presence.is_match(text)
    }

    /// Text from the marker up to, not including, the next `*/`.
    pub fn block_body<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.block_body
            .captures(text)
            .and_then(|caps| caps.name("body"))
            .map(|body| body.as_str())
    }

    /// Everything after the marker and the one character following it.
    pub fn after_marker<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.post_marker.find(text).map(|m| &text[m.end()..])
    }
}
