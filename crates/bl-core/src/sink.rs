//! Output sinks.
//!
//! A sink is anything that accepts text. The plain-text sink receives lines
//! as they are logged; the HTML sink receives the whole document once, when
//! the owning Boolog concludes, and is closed exactly once after that.

use std::fs::File;
use std::io::{self, BufWriter, Stderr, Stdout, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// A writable text destination with an explicit close.
pub trait Sink: Write + Send {
    /// Release the sink. Called at most once, after the final write.
    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl Sink for File {
    fn close(&mut self) -> io::Result<()> {
        self.flush()?;
        self.sync_all()
    }
}

impl Sink for Stdout {}

impl Sink for Stderr {}

impl Sink for Vec<u8> {}

impl<W: Write + Send> Sink for BufWriter<W> {}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    bytes: Vec<u8>,
    closes: usize,
}

/// In-memory sink with a shared handle.
///
/// Clones share the same buffer, so a caller can hand one clone to a Boolog
/// and keep another to read back what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock().bytes).into_owned()
    }

    /// Number of times `close()` was called.
    pub fn close_count(&self) -> usize {
        self.lock().closes
    }

    /// True once the sink has been closed.
    pub fn is_closed(&self) -> bool {
        self.close_count() > 0
    }

    /// Box a clone of this handle for handing to a Boolog.
    pub fn boxed(&self) -> Box<dyn Sink> {
        Box::new(self.clone())
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A panic while holding the lock leaves plain bytes behind; keep using them.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.lock();
        if state.closes > 0 {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "write to a closed memory sink",
            ));
        }
        state.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for MemorySink {
    fn close(&mut self) -> io::Result<()> {
        self.lock().closes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shares_buffer_between_clones() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write_all(b"hello").unwrap();
        assert_eq!(sink.contents(), "hello");
    }

    #[test]
    fn test_memory_sink_counts_closes_and_rejects_late_writes() {
        let sink = MemorySink::new();
        let mut writer = sink.boxed();
        assert!(!sink.is_closed());
        writer.close().unwrap();
        assert_eq!(sink.close_count(), 1);
        assert!(writer.write_all(b"late").is_err());
    }

    #[test]
    fn test_file_sink_close_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"persisted").unwrap();
        Sink::close(&mut file).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "persisted");
    }
}
