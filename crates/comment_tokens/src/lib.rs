// crates/comment_tokens/src/lib.rs

//! Comment tokens and the default marker, shared by the extraction crates.

/// Opens a block comment.
pub const BLOCK_START: &str = "/*";

/// Closes a block comment.
pub const BLOCK_END: &str = "*/";

/// Opens a line comment.
pub const LINE_START: &str = "//";

/// Marker looked for when the caller does not supply one.
pub const DEFAULT_MARKER: &str = "RAML";

/// One of the three comment delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentToken {
    BlockStart,
    BlockEnd,
    LineStart,
}

impl CommentToken {
    /// The literal text of the token.
    pub fn as_str(self) -> &'static str {
        match self {
            CommentToken::BlockStart => BLOCK_START,
            CommentToken::BlockEnd => BLOCK_END,
            CommentToken::LineStart => LINE_START,
        }
    }

    /// Byte width of the token; every token is two ASCII characters.
    pub fn width(self) -> usize {
        self.as_str().len()
    }

    /// Byte offset of the leftmost occurrence of the token in `line`.
    pub fn find_in(self, line: &str) -> Option<usize> {
        line.find(self.as_str())
    }

    /// Byte offset of the leftmost occurrence at or after `from`.
    pub fn find_from(self, line: &str, from: usize) -> Option<usize> {
        line.get(from..)
            .and_then(|rest| rest.find(self.as_str()))
            .map(|offset| offset + from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_in_reports_leftmost_offset() {
        assert_eq!(CommentToken::LineStart.find_in("a // b // c"), Some(2));
        assert_eq!(CommentToken::BlockStart.find_in("no comment here"), None);
    }

    #[test]
    fn test_find_from_skips_earlier_occurrences() {
        // "/*/" must not be read as an immediately closed comment.
        let line = "/*/ text */";
        assert_eq!(CommentToken::BlockEnd.find_in(line), Some(1));
        assert_eq!(CommentToken::BlockEnd.find_from(line, 2), Some(9));
    }

    #[test]
    fn test_find_from_past_end_is_none() {
        assert_eq!(CommentToken::BlockEnd.find_from("*/", 5), None);
    }
}
