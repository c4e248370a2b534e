// crates/comment_groups/src/classifier.rs

use comment_tokens::CommentToken;

use crate::collector::CommentStyle;

/// Offsets of the first comment openers found on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineTokens {
    pub block_start: Option<usize>,
    pub line_start: Option<usize>,
}

impl LineTokens {
    /// The comment style that opens first on the line.
    ///
    /// Purely positional: a `//` or `/*` inside a string literal counts.
    /// When both tokens share an offset the block comment wins.
    pub fn earliest(&self) -> Option<CommentStyle> {
        match (self.block_start, self.line_start) {
            (None, None) => None,
            (Some(_), None) => Some(CommentStyle::Block),
            (None, Some(_)) => Some(CommentStyle::Line),
            (Some(block), Some(line)) if block <= line => Some(CommentStyle::Block),
            (Some(_), Some(_)) => Some(CommentStyle::Line),
        }
    }
}

pub fn classify_line(line: &str) -> LineTokens {
    LineTokens {
        block_start: CommentToken::BlockStart.find_in(line),
        line_start: CommentToken::LineStart.find_in(line),
    }
}

/// Lines with at most one visible character cannot open a comment.
pub fn is_blank(line: &str) -> bool {
    line.trim().chars().nth(1).is_none()
}
