// crates/comment_groups/src/scanner.rs

use log::{debug, warn};

use crate::classifier::{classify_line, is_blank};
use crate::collector::{collector_for, Collected};
use crate::CommentGroup;

/// Outcome of one scanner step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStep<'a> {
    /// The cursor is at the end of the document.
    Done,
    /// No group starts here; continue at the given line.
    Skip(usize),
    /// A group was collected.
    Group(Collected<'a>),
}

/// Looks at `lines[index]` and either skips it or collects the group that
/// opens there. Every step other than `Done` moves the cursor forward.
pub fn scan_step<'a>(lines: &[&'a str], index: usize) -> ScanStep<'a> {
    let Some(&line) = lines.get(index) else {
        return ScanStep::Done;
    };
    if is_blank(line) {
        return ScanStep::Skip(index + 1);
    }
    let Some(style) = classify_line(line).earliest() else {
        return ScanStep::Skip(index + 1);
    };

    match collector_for(style).collect(lines, index) {
        Ok(collected) => {
            debug_assert!(collected.next > index);
            ScanStep::Group(collected)
        }
        Err(err) => {
            warn!("Skipping line {}: {}", index + 1, err);
            ScanStep::Skip(index + 1)
        }
    }
}

/// Splits the whole document into comment groups, in document order.
pub fn scan_groups<'a>(lines: &[&'a str]) -> Vec<CommentGroup<'a>> {
    let mut groups = Vec::new();
    let mut index = 0;
    loop {
        match scan_step(lines, index) {
            ScanStep::Done => break,
            ScanStep::Skip(next) => index = next,
            ScanStep::Group(Collected { next, group }) => {
                index = next;
                groups.push(group);
            }
        }
    }
    debug!("Found {} comment group(s) in {} line(s)", groups.len(), lines.len());
    groups
}
