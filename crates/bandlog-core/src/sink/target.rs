//! Write targets owned by sinks

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{LogError, LogResult};

/// Destination bytes are written to
///
/// A file target is opened in append mode; a stream target wraps any writer
/// (stdout, stderr, sockets already opened by the caller, in-memory buffers).
pub enum SinkTarget {
    File { path: PathBuf, writer: BufWriter<File> },
    Stream(Box<dyn Write + Send>),
}

impl SinkTarget {
    /// Open `path` for appending, creating missing parent directories
    pub fn file(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LogError::io(path, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogError::io(path, e))?;

        Ok(Self::File {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Wrap an already open writer
    pub fn stream(writer: impl Write + Send + 'static) -> Self {
        Self::Stream(Box::new(writer))
    }

    pub fn stdout() -> Self {
        Self::stream(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::stream(io::stderr())
    }

    /// Short description for diagnostics
    pub fn describe(&self) -> String {
        match self {
            SinkTarget::File { path, .. } => path.display().to_string(),
            SinkTarget::Stream(_) => "<stream>".to_string(),
        }
    }

    /// Join the parts and hand them to the writer in one `write_all`, then flush
    pub(crate) fn write_parts(&mut self, parts: &[&str]) -> io::Result<()> {
        let record = parts.concat();
        self.write_all(record.as_bytes())?;
        self.flush()
    }
}

impl Write for SinkTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SinkTarget::File { writer, .. } => writer.write(buf),
            SinkTarget::Stream(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SinkTarget::File { writer, .. } => writer.flush(),
            SinkTarget::Stream(writer) => writer.flush(),
        }
    }
}

impl fmt::Debug for SinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkTarget::File { path, .. } => f.debug_struct("File").field("path", path).finish(),
            SinkTarget::Stream(_) => f.write_str("Stream"),
        }
    }
}

/// In-memory writer whose clones share one buffer
///
/// Hand one clone to a sink (or the console) and read the captured output
/// through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Drop everything captured so far
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Records every `write` call as a separate chunk
    #[derive(Clone, Default)]
    struct ChunkWriter {
        chunks: Arc<Mutex<Vec<String>>>,
    }

    impl Write for ChunkWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.chunks.lock().push(String::from_utf8_lossy(buf).into_owned());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_file_target_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("app.log");

        let mut target = SinkTarget::file(&path).unwrap();
        target.write_parts(&["hello", "\n"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
        assert_eq!(target.describe(), path.display().to_string());
    }

    #[test]
    fn test_file_target_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n").unwrap();

        let mut target = SinkTarget::file(&path).unwrap();
        target.write_parts(&["more\n"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nmore\n");
    }

    #[test]
    fn test_file_target_unopenable() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = SinkTarget::file(blocker.join("app.log"));
        assert!(matches!(result, Err(LogError::Io { .. })));
    }

    #[test]
    fn test_memory_writer_shared() {
        let capture = MemoryWriter::new();
        let mut target = SinkTarget::stream(capture.clone());
        assert!(capture.is_empty());

        target.write_parts(&["a", "b"]).unwrap();
        assert_eq!(capture.contents(), "ab");
        assert_eq!(target.describe(), "<stream>");

        capture.clear();
        assert!(capture.is_empty());
    }

    #[test]
    fn test_write_parts_single_write() {
        let writer = ChunkWriter::default();
        let mut target = SinkTarget::stream(writer.clone());

        target.write_parts(&["\u{1B}[36m", "line", "\u{1B}[0m", "\n"]).unwrap();
        target.write_parts(&["next", "\n"]).unwrap();

        let chunks = writer.chunks.lock().clone();
        assert_eq!(chunks, vec!["\u{1B}[36mline\u{1B}[0m\n", "next\n"]);
    }
}
