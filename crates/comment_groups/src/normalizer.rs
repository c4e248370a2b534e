// crates/comment_groups/src/normalizer.rs

use comment_tokens::{BLOCK_END, BLOCK_START, LINE_START};
use log::debug;

use crate::marker::Marker;
use crate::CommentGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupShape {
    /// Opens with `/*` and closes with `*/`.
    Block,
    /// Opens with `//`.
    Line,
}

/// Decides the shape of a group from its fragments alone.
///
/// An unterminated block comment has neither shape.
pub fn classify(group: &CommentGroup<'_>) -> Option<GroupShape> {
    let first = group.first()?;
    let last = group.last()?;

    let opens = first.starts_with(BLOCK_START);
    let closes = last.ends_with(BLOCK_END)
        && (group.line_count() > 1 || last.len() >= BLOCK_START.len() + BLOCK_END.len());
    if opens && closes {
        return Some(GroupShape::Block);
    }
    if first.starts_with(LINE_START) {
        return Some(GroupShape::Line);
    }
    None
}

fn strip_one_space(text: &str) -> &str {
    text.strip_prefix(' ').unwrap_or(text)
}

/// Joins the fragments of a block group and keeps the part running from the
/// marker to just before `*/`.
pub fn block_text(group: &CommentGroup<'_>, marker: &Marker) -> Option<String> {
    let mut joined = String::new();
    for fragment in group.fragments() {
        joined.push_str(strip_one_space(fragment));
        joined.push('\n');
    }
    marker
        .block_body(&joined)
        .map(|body| strip_one_space(body).to_string())
}

/// Drops the `//` prefix (and one space after it) from every fragment.
pub fn line_text(group: &CommentGroup<'_>) -> String {
    let mut text = String::new();
    for fragment in group.fragments() {
        let content = fragment
            .strip_prefix(LINE_START)
            .map(strip_one_space)
            .unwrap_or(fragment);
        text.push_str(content);
        text.push('\n');
    }
    text
}

/// De-commented text of `group` when it is well formed and mentions the marker.
pub fn normalize(group: &CommentGroup<'_>, marker: &Marker) -> Option<String> {
    let text = match classify(group) {
        Some(GroupShape::Block) => block_text(group, marker)?,
        Some(GroupShape::Line) => line_text(group),
        None => {
            debug!(
                "Dropping malformed comment group at line {}",
                group.start_line() + 1
            );
            return None;
        }
    };
    marker.is_in(&text).then_some(text)
}

/// Normalizes every group that mentions the marker, keeping document order.
pub fn normalize_all(groups: &[CommentGroup<'_>], marker: &Marker) -> Vec<String> {
    groups
        .iter()
        .filter_map(|group| normalize(group, marker))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group<'a>(fragments: &[&'a str]) -> CommentGroup<'a> {
        let mut group = CommentGroup::new(0);
        for fragment in fragments {
            group.push(fragment);
        }
        group
    }

    fn raml() -> Marker {
        Marker::literal("RAML").unwrap()
    }

    #[test]
    fn test_classify_shapes() {
        assert_eq!(classify(&group(&["/* a */"])), Some(GroupShape::Block));
        assert_eq!(classify(&group(&["/*", " a", " */"])), Some(GroupShape::Block));
        assert_eq!(classify(&group(&["// a", "// b"])), Some(GroupShape::Line));
        assert_eq!(classify(&group(&["// see /* a */"])), Some(GroupShape::Line));
        assert_eq!(classify(&group(&["/* never", "closed"])), None);
        assert_eq!(classify(&group(&["/*/"])), None);
        assert_eq!(classify(&group(&[])), None);
    }

    #[test]
    fn test_single_line_block() {
        let text = normalize(&group(&["/* RAML text */"]), &raml());
        assert_eq!(text.as_deref(), Some("RAML text "));
    }

    #[test]
    fn test_multi_line_block_keeps_star_gutter() {
        let fragments = ["/*", " * RAML", " * title: Test", " */"];
        let text = normalize(&group(&fragments), &raml()).unwrap();
        assert_eq!(text, "RAML\n* title: Test\n");
    }

    #[test]
    fn test_block_without_marker_is_dropped() {
        let fragments = ["/*", " * just a note", " */"];
        assert_eq!(normalize(&group(&fragments), &raml()), None);
    }

    #[test]
    fn test_line_group_strips_prefix_and_one_space() {
        let text = normalize(&group(&["// RAML", "// title: Test", "//   indented"]), &raml());
        assert_eq!(text.as_deref(), Some("RAML\ntitle: Test\n  indented\n"));
    }

    #[test]
    fn test_line_group_without_marker_is_dropped() {
        assert_eq!(normalize(&group(&["// nothing here"]), &raml()), None);
    }

    #[test]
    fn test_unterminated_block_is_dropped() {
        assert_eq!(normalize(&group(&["/* RAML", "title: Test"]), &raml()), None);
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let groups = vec![
            group(&["// RAML first"]),
            group(&["/* skipped */"]),
            group(&["/* RAML second */"]),
        ];
        let texts = normalize_all(&groups, &raml());
        assert_eq!(texts, vec!["RAML first\n".to_string(), "RAML second ".to_string()]);
    }
}
