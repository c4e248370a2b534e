// crates/marker_filter/src/lib.rs

//! Picks the text after the marker out of normalized comment texts and
//! hands it to a sink.

use comment_groups::Marker;

pub mod sink;

pub use sink::{emit_all, ExtractSink, FileSink, StreamSink};

/// Text following the marker (plus its leading blanks, trailing tabs and one
/// more character), or `None` when the marker does not qualify the text.
pub fn post_marker_text<'t>(text: &'t str, marker: &Marker) -> Option<&'t str> {
    marker.after_marker(text)
}

/// The post-marker chunks of every qualifying text, in input order.
pub fn post_marker_chunks<S: AsRef<str>>(texts: &[S], marker: &Marker) -> Vec<String> {
    texts
        .iter()
        .filter_map(|text| post_marker_text(text.as_ref(), marker))
        .map(str::to_string)
        .collect()
}
