//! Review comments and per-file outcomes

use serde::{Deserialize, Serialize};

/// One review comment destined for a comment sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewComment {
    /// File path the comment applies to
    pub path: String,
    /// Human-readable message body
    pub body: String,
    /// Line number the comment anchors to (1-based)
    pub line: usize,
}

impl ReviewComment {
    /// Create a comment anchored to the top of a file
    pub fn file_level<P: Into<String>, B: Into<String>>(path: P, body: B) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
            line: 1,
        }
    }
}

/// The single outcome produced for one file in a batch
///
/// Every file yields exactly one outcome, even under partial failure: a
/// fatal per-file error is rendered into the comment list and flagged, so
/// one failing file never aborts the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    /// File path this outcome describes
    pub path: String,
    /// Ordered review comments for the file
    pub comments: Vec<ReviewComment>,
    /// True when the file failed fatally (parse error, unreadable content)
    pub failed: bool,
    /// Number of definitions that validated as invalid or whose
    /// validation could not be completed
    pub invalid: usize,
}

impl FileOutcome {
    /// Outcome for a file that was analyzed
    pub fn analyzed<P: Into<String>>(path: P, comments: Vec<ReviewComment>, invalid: usize) -> Self {
        Self {
            path: path.into(),
            comments,
            failed: false,
            invalid,
        }
    }

    /// Outcome for a file that failed fatally
    pub fn failed<P: Into<String> + Clone, M: std::fmt::Display>(path: P, message: M) -> Self {
        let body = format!("Failed to analyze file: {message}");
        Self {
            path: path.clone().into(),
            comments: vec![ReviewComment::file_level(path, body)],
            failed: true,
            invalid: 0,
        }
    }
}
