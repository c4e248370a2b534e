// crates/comment_docs/src/lib.rs

use anyhow::{Context, Result};
use log::{debug, info};
use std::env;
use std::fs;
use std::path::PathBuf;

use comment_groups::{normalize_all, scan_groups, Marker};
use comment_tokens::DEFAULT_MARKER;
use marker_filter::{emit_all, post_marker_chunks, ExtractSink, FileSink, StreamSink};

/// Environment variable consulted when no marker is given on the command line.
pub const MARKER_ENV: &str = "COMMENT_DOCS_MARKER";

/// Configuration for one extraction run.
#[derive(Clone, Debug)]
pub struct ExtractConfig {
    /// Source file to scan.
    pub source: PathBuf,
    /// Destination file; `None` writes to standard output.
    pub output: Option<PathBuf>,
    /// Token a comment must contain to be extracted.
    pub marker: String,
    /// Treat `marker` as a regular expression instead of literal text.
    pub regex_marker: bool,
    /// Enable verbose logging.
    pub verbose: bool,
}

impl ExtractConfig {
    /// Defaults: standard output, literal marker from `COMMENT_DOCS_MARKER`
    /// or `RAML`.
    pub fn new<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            source: source.into(),
            output: None,
            marker: default_marker(),
            regex_marker: false,
            verbose: false,
        }
    }

    pub fn marker_pattern(&self) -> Result<Marker> {
        let marker = if self.regex_marker {
            Marker::regex(&self.marker)
        } else {
            Marker::literal(&self.marker)
        };
        marker.with_context(|| format!("Invalid marker '{}'", self.marker))
    }
}

pub fn default_marker() -> String {
    env::var(MARKER_ENV)
        .ok()
        .filter(|marker| !marker.is_empty())
        .unwrap_or_else(|| DEFAULT_MARKER.to_string())
}

/// Runs the whole pipeline over in-memory source text and returns the
/// post-marker chunks in document order.
pub fn extract_chunks(content: &str, marker: &Marker) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    let groups = scan_groups(&lines);
    let texts = normalize_all(&groups, marker);
    debug!(
        "{} of {} comment group(s) mention '{}'",
        texts.len(),
        groups.len(),
        marker.as_str()
    );
    post_marker_chunks(&texts, marker)
}

/// Reads `config.source`, extracts the marked comments and writes them to
/// the configured sink. Returns the number of chunks written.
///
/// # Errors
///
/// Returns an error if the marker is invalid, the source cannot be read, or
/// a write to the destination fails. Finding no marked comment is not an
/// error.
pub fn extract_file(config: &ExtractConfig) -> Result<usize> {
    let marker = config.marker_pattern()?;
    let content = fs::read_to_string(&config.source)
        .with_context(|| format!("Error reading file {}", config.source.display()))?;

    let chunks = extract_chunks(&content, &marker);
    info!(
        "Extracted {} block(s) from {}",
        chunks.len(),
        config.source.display()
    );

    let mut sink: Box<dyn ExtractSink> = match &config.output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(StreamSink::stdout()),
    };
    emit_all(&chunks, sink.as_mut())
}
