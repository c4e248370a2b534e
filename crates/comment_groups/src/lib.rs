// crates/comment_groups/src/lib.rs

//! Splits source text into comment groups and turns marked groups into
//! plain text.
//!
//! A comment group is either one `/* ... */` block comment (possibly spanning
//! several lines) or a run of adjacent lines that each carry a `//` comment.
//! The scanner makes one forward pass over the lines; the normalizer then
//! strips the comment syntax from the groups that contain the marker.

use std::ops::Range;

pub mod classifier;
pub mod collector;
pub mod marker;
pub mod normalizer;
pub mod scanner;

pub use collector::{collector_for, CollectError, Collected, CommentCollector, CommentStyle};
pub use marker::{Marker, MarkerError};
pub use normalizer::{classify, normalize, normalize_all, GroupShape};
pub use scanner::{scan_groups, scan_step, ScanStep};

/// Contiguous run of comment lines, borrowed from the source document.
///
/// Fragments may be slices of their lines: the opening fragment starts at the
/// comment token and a block's closing fragment stops right after `*/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup<'a> {
    start_line: usize,
    fragments: Vec<&'a str>,
}

impl<'a> CommentGroup<'a> {
    pub fn new(start_line: usize) -> Self {
        Self {
            start_line,
            fragments: Vec::new(),
        }
    }

    pub fn push(&mut self, fragment: &'a str) {
        self.fragments.push(fragment);
    }

    /// Index of the first member line in the document.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn line_count(&self) -> usize {
        self.fragments.len()
    }

    /// Document line indices covered by the group.
    pub fn line_range(&self) -> Range<usize> {
        self.start_line..self.start_line + self.fragments.len()
    }

    pub fn fragments(&self) -> &[&'a str] {
        &self.fragments
    }

    pub fn first(&self) -> Option<&'a str> {
        self.fragments.first().copied()
    }

    pub fn last(&self) -> Option<&'a str> {
        self.fragments.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_range_follows_fragments() {
        let mut group = CommentGroup::new(4);
        group.push("// one");
        group.push("// two");
        assert_eq!(group.line_range(), 4..6);
        assert_eq!(group.first(), Some("// one"));
        assert_eq!(group.last(), Some("// two"));
    }

    #[test]
    fn test_empty_group_has_no_ends() {
        let group = CommentGroup::new(0);
        assert_eq!(group.line_count(), 0);
        assert!(group.first().is_none());
    }
}
