// crates/comment_groups/src/collector/mod.rs

//! Collectors turn the line at a cursor into one comment group.
//!
//! Each collector takes the full line array plus a start index and hands back
//! the index of the first line it did not consume, so the scanner owns the
//! cursor and no state is shared between calls.

mod block;
mod line;

pub use block::BlockCommentCollector;
pub use line::LineCommentCollector;

use crate::CommentGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* ... */`, possibly over several lines.
    Block,
    /// Adjacent `//` lines.
    Line,
}

/// A finished group and the cursor position right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected<'a> {
    pub next: usize,
    pub group: CommentGroup<'a>,
}

/// Reasons a collector refuses to start at the given line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectError {
    #[error("line {line} is past the end of the document")]
    OutOfRange { line: usize },
    #[error("no block comment opens on line {line}")]
    MissingBlockStart { line: usize },
    #[error("line {line} does not open with a line comment")]
    NotLineComment { line: usize },
}

/// Capability shared by the block and line comment collectors.
pub trait CommentCollector {
    fn style(&self) -> CommentStyle;

    /// Offset at which this style of comment opens on `line`, if it does.
    fn starts_at(&self, line: &str) -> Option<usize>;

    /// Consumes the group opening at `lines[index]`.
    ///
    /// On success `next` is always greater than `index`.
    fn collect<'a>(&self, lines: &[&'a str], index: usize) -> Result<Collected<'a>, CollectError>;
}

static BLOCK_COLLECTOR: BlockCommentCollector = BlockCommentCollector;
static LINE_COLLECTOR: LineCommentCollector = LineCommentCollector;

pub fn collector_for(style: CommentStyle) -> &'static dyn CommentCollector {
    match style {
        CommentStyle::Block => &BLOCK_COLLECTOR,
        CommentStyle::Line => &LINE_COLLECTOR,
    }
}
