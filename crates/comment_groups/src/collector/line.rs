// crates/comment_groups/src/collector/line.rs

use comment_tokens::CommentToken;

use super::{CollectError, Collected, CommentCollector, CommentStyle};
use crate::CommentGroup;

/// Collects a run of adjacent `//` lines.
///
/// A line belongs to the run when it has a `//` and no `/*` before it. Each
/// fragment starts at its `//`, so code in front of a trailing comment is
/// left out.
pub struct LineCommentCollector;

impl CommentCollector for LineCommentCollector {
    fn style(&self) -> CommentStyle {
        CommentStyle::Line
    }

    fn starts_at(&self, line: &str) -> Option<usize> {
        let offset = CommentToken::LineStart.find_in(line)?;
        match CommentToken::BlockStart.find_in(line) {
            Some(block) if block < offset => None,
            _ => Some(offset),
        }
    }

    fn collect<'a>(&self, lines: &[&'a str], index: usize) -> Result<Collected<'a>, CollectError> {
        let first = *lines
            .get(index)
            .ok_or(CollectError::OutOfRange { line: index })?;
        let offset = self
            .starts_at(first)
            .ok_or(CollectError::NotLineComment { line: index })?;

        let mut group = CommentGroup::new(index);
        group.push(&first[offset..]);

        let mut cursor = index + 1;
        while let Some(&line) = lines.get(cursor) {
            let Some(offset) = self.starts_at(line) else {
                break;
            };
            group.push(&line[offset..]);
            cursor += 1;
        }

        Ok(Collected { next: cursor, group })
    }
}
