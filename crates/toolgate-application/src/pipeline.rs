//! The review pipeline use case
//!
//! source text → extractor → per-definition oracle verdicts → report
//! assembly. Failure isolation follows the error taxonomy: a parse failure
//! is fatal for its file, an oracle failure for its definition, and
//! neither ever aborts the batch.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use toolgate_analysis::DefinitionExtractor;
use toolgate_domain::{FileOutcome, ToolMarkers};

use crate::ports::SchemaOracle;
use crate::report::{self, ToolFinding};

/// Runs the full review for files and batches
///
/// Cheap to clone: the extractor is a small config struct and the oracle is
/// shared. Batches fan out one task per file — each file's records and
/// verdicts are self-contained, so no coordination is needed beyond
/// reassembling results in input order.
#[derive(Clone)]
pub struct ReviewPipeline {
    extractor: DefinitionExtractor,
    oracle: Arc<dyn SchemaOracle>,
}

impl ReviewPipeline {
    /// Create a pipeline with the given markers and oracle
    pub fn new(markers: ToolMarkers, oracle: Arc<dyn SchemaOracle>) -> Self {
        Self {
            extractor: DefinitionExtractor::new(markers),
            oracle,
        }
    }

    /// Review one file's source text, producing its single outcome
    ///
    /// Definitions validate sequentially within a file to keep comment
    /// order stable.
    pub async fn review_source(&self, path: &str, content: &str) -> FileOutcome {
        let records = match self.extractor.extract(content, path) {
            Ok(records) => records,
            Err(error) => {
                warn!(path, %error, "file analysis failed");
                return FileOutcome::failed(path, error);
            }
        };
        debug!(path, tools = records.len(), "extracted tool records");

        let mut findings = Vec::with_capacity(records.len());
        for record in records {
            let finding = match record.definition {
                None => ToolFinding::NoSchema {
                    class_name: record.class_name,
                },
                Some(definition) => match self.oracle.judge(&definition).await {
                    Ok(verdict) => ToolFinding::Judged {
                        class_name: record.class_name,
                        verdict,
                    },
                    Err(error) => {
                        warn!(
                            path,
                            class = %record.class_name,
                            oracle = self.oracle.oracle_name(),
                            %error,
                            "oracle failed for definition"
                        );
                        ToolFinding::OracleFailed {
                            class_name: record.class_name,
                            message: error.to_string(),
                        }
                    }
                },
            };
            findings.push(finding);
        }

        let invalid = report::invalid_count(&findings);
        FileOutcome::analyzed(path, report::assemble(path, &findings), invalid)
    }

    /// Review a batch of `(path, content)` pairs
    ///
    /// Files are processed on independent tasks; outcomes come back in
    /// input order and every file yields exactly one outcome.
    pub async fn review_batch(&self, files: Vec<(String, String)>) -> Vec<FileOutcome> {
        let total = files.len();
        let mut join_set = JoinSet::new();
        for (index, (path, content)) in files.into_iter().enumerate() {
            let pipeline = self.clone();
            join_set.spawn(async move {
                (index, pipeline.review_source(&path, &content).await)
            });
        }

        let mut slots: Vec<Option<FileOutcome>> = std::iter::repeat_with(|| None)
            .take(total)
            .collect();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(error) => warn!(%error, "review task failed to join"),
            }
        }
        slots.into_iter().flatten().collect()
    }
}
