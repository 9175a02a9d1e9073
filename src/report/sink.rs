// src/report/sink.rs
// Destinations for rendered reports.

use super::ReportError;
use std::fs;
use std::path::PathBuf;

/// Somewhere to put a named report file
pub trait ReportSink {
    fn write(&mut self, name: &str, contents: &[u8]) -> Result<(), ReportError>;
}

/// Writes each report as a file inside one directory (overwriting old runs)
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportSink for DirectorySink {
    fn write(&mut self, name: &str, contents: &[u8]) -> Result<(), ReportError> {
        let path = self.dir.join(name);
        fs::write(&path, contents).map_err(|source| ReportError::Write { path, source })
    }
}

/// Keeps reports in memory, for tests
#[cfg(test)]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MemorySink {
    files: std::collections::BTreeMap<String, Vec<u8>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn file_names(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    pub fn contents(&self, name: &str) -> Option<&str> {
        self.files
            .get(name)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

#[cfg(test)]
impl ReportSink for MemorySink {
    fn write(&mut self, name: &str, contents: &[u8]) -> Result<(), ReportError> {
        self.files.insert(name.to_string(), contents.to_vec());
        Ok(())
    }
}
