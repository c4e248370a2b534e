// crates/marker_filter/src/sink.rs

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Destination for extracted chunks.
pub trait ExtractSink {
    /// Writes one chunk. Called once per qualifying group, in document order.
    fn emit(&mut self, chunk: &str) -> Result<()>;
}

/// Writes each chunk to a stream followed by a newline.
pub struct StreamSink<W: Write> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StreamSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ExtractSink for StreamSink<W> {
    fn emit(&mut self, chunk: &str) -> Result<()> {
        writeln!(self.writer, "{}", chunk).context("Error writing extracted text")?;
        self.writer.flush().context("Error flushing extracted text")
    }
}

/// Writes chunks to a file: the first one truncates, the rest append.
///
/// The file is not touched until the first chunk arrives.
pub struct FileSink {
    path: PathBuf,
    written: usize,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of chunks written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl ExtractSink for FileSink {
    fn emit(&mut self, chunk: &str) -> Result<()> {
        if self.written == 0 {
            fs::write(&self.path, chunk)
                .with_context(|| format!("Error writing file {}", self.path.display()))?;
        } else {
            let mut file = OpenOptions::new()
                .append(true)
                .open(&self.path)
                .with_context(|| format!("Error opening file {} for append", self.path.display()))?;
            file.write_all(chunk.as_bytes())
                .with_context(|| format!("Error appending to file {}", self.path.display()))?;
        }
        self.written += 1;
        debug!("Wrote chunk {} to {}", self.written, self.path.display());
        Ok(())
    }
}

/// Sends every chunk to `sink`, stopping at the first write failure.
/// Returns the number of chunks written.
pub fn emit_all<S: AsRef<str>>(chunks: &[S], sink: &mut dyn ExtractSink) -> Result<usize> {
    for chunk in chunks {
        sink.emit(chunk.as_ref())?;
    }
    if chunks.is_empty() {
        info!("No comment group contains the marker; nothing written");
    }
    Ok(chunks.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use tempfile::tempdir;

    /// Sink that fails on every write.
    struct FailingSink;

    impl ExtractSink for FailingSink {
        fn emit(&mut self, _chunk: &str) -> Result<()> {
            Err(anyhow!("Simulated write failure"))
        }
    }

    #[test]
    fn test_stream_sink_writes_one_line_per_chunk() {
        let mut sink = StreamSink::new(Vec::new());
        let count = emit_all(&["first", "second\n"], &mut sink).unwrap();
        assert_eq!(count, 2);
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "first\nsecond\n\n");
    }

    #[test]
    fn test_file_sink_truncates_then_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("api.raml");
        fs::write(&path, "left over from an earlier run\n").unwrap();

        let mut sink = FileSink::new(&path);
        emit_all(&["title: A\n", "version: v1\n"], &mut sink).unwrap();
        assert_eq!(sink.written(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "title: A\nversion: v1\n");
    }

    #[test]
    fn test_file_sink_untouched_without_chunks() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("api.raml");
        fs::write(&path, "previous\n").unwrap();

        let mut sink = FileSink::new(&path);
        let chunks: [&str; 0] = [];
        assert_eq!(emit_all(&chunks, &mut sink).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous\n");
    }

    #[test]
    fn test_file_sink_reports_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("api.raml");
        let mut sink = FileSink::new(&path);
        let err = sink.emit("title: A\n").unwrap_err();
        assert!(err.to_string().contains("Error writing file"));
    }

    #[test]
    fn test_emit_all_stops_on_failure() {
        let result = emit_all(&["a"], &mut FailingSink);
        assert!(result.is_err());
    }
}
