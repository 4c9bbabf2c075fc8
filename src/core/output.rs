//! Public output types for recase command responses.

use serde::Serialize;

/// A file the rewriter could not process in keep-going mode.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileFailure {
    pub file: String,
    pub code: String,
    pub error: String,
}

/// Summary of one rewrite pass over a directory tree.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RewriteSummary {
    pub root: String,
    /// Eligible files that were opened and read.
    pub files_scanned: usize,
    pub files_updated: usize,
    pub updated: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FileFailure>,
}

impl RewriteSummary {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn record_scanned(&mut self) {
        self.files_scanned += 1;
    }

    pub fn record_updated(&mut self, file: String) {
        self.files_updated += 1;
        self.updated.push(file);
    }

    pub fn record_failure(&mut self, file: String, err: &crate::Error) {
        self.failures.push(FileFailure {
            file,
            code: err.code.as_str().to_string(),
            error: err.details.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
