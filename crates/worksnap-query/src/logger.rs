//! Best-effort debug log
//!
//! Every component funnels its progress lines through [`DebugLogger`], which
//! appends timestamped lines to a plain-text file and mirrors each line to the
//! console stream via `tracing`. File I/O is best-effort: an append failure is
//! swallowed and only the console emission is guaranteed.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct DebugLogger {
    path: PathBuf,
}

impl DebugLogger {
    /// Create the logger and truncate the log file. Truncation happens
    /// exactly once, here; two sequential runs never concatenate output.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Err(e) = std::fs::write(&path, "") {
            tracing::warn!(path = %path.display(), error = %e, "Could not truncate debug log");
        }
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `[yyyy-MM-dd HH:mm:ss] message` to the log file and mirror the
    /// message to the console stream.
    pub fn log(&self, message: &str) {
        let line = format!("[{}] {}\n", Local::now().format("%Y-%m-%d %H:%M:%S"), message);
        if let Err(e) = self.append(&line) {
            tracing::warn!(path = %self.path.display(), error = %e, "Debug log append failed");
        }
        tracing::info!("{message}");
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().append(true).create(true).open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug_log.txt");

        let logger = DebugLogger::new(&path);
        logger.log("first message");
        logger.log("second message");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] first message"));
        assert!(lines[1].ends_with("] second message"));
        // "[yyyy-MM-dd HH:mm:ss] " prefix is 22 characters
        assert_eq!(lines[0].as_bytes()[0], b'[');
        assert_eq!(&lines[0][21..22], " ");
    }

    #[test]
    fn construction_truncates_prior_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug_log.txt");

        let first = DebugLogger::new(&path);
        first.log("from the first run");
        drop(first);

        let second = DebugLogger::new(&path);
        second.log("from the second run");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("from the first run"));
        assert!(contents.contains("from the second run"));
    }

    #[test]
    fn append_failure_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        // Path points at a directory, so both truncate and append fail
        let logger = DebugLogger::new(dir.path());
        logger.log("goes to console only");
    }
}
