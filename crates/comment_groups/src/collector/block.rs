// crates/comment_groups/src/collector/block.rs

use comment_tokens::CommentToken;
use log::debug;

use super::{CollectError, Collected, CommentCollector, CommentStyle};
use crate::CommentGroup;

/// Collects one `/* ... */` comment.
///
/// The opening fragment starts at `/*`; the closing fragment ends right after
/// `*/`. Anything after `*/` on the closing line is not rescanned. When the
/// document ends before `*/` the lines gathered so far still form a group.
pub struct BlockCommentCollector;

impl CommentCollector for BlockCommentCollector {
    fn style(&self) -> CommentStyle {
        CommentStyle::Block
    }

    fn starts_at(&self, line: &str) -> Option<usize> {
        CommentToken::BlockStart.find_in(line)
    }

    fn collect<'a>(&self, lines: &[&'a str], index: usize) -> Result<Collected<'a>, CollectError> {
        let first = *lines
            .get(index)
            .ok_or(CollectError::OutOfRange { line: index })?;
        let start = self
            .starts_at(first)
            .ok_or(CollectError::MissingBlockStart { line: index })?;

        let mut group = CommentGroup::new(index);

        // Search past the opener so "/*/" does not close itself.
        let body_from = start + CommentToken::BlockStart.width();
        if let Some(end) = CommentToken::BlockEnd.find_from(first, body_from) {
            group.push(&first[start..end + CommentToken::BlockEnd.width()]);
            return Ok(Collected {
                next: index + 1,
                group,
            });
        }
        group.push(&first[start..]);

        let mut cursor = index + 1;
        while let Some(&line) = lines.get(cursor) {
            cursor += 1;
            match CommentToken::BlockEnd.find_in(line) {
                Some(end) => {
                    group.push(&line[..end + CommentToken::BlockEnd.width()]);
                    return Ok(Collected { next: cursor, group });
                }
                None => group.push(line),
            }
        }

        debug!(
            "Block comment opened on line {} is never closed; keeping {} line(s)",
            index + 1,
            group.line_count()
        );
        Ok(Collected { next: cursor, group })
    }
}
