//! Human-readable terminal sink

use async_trait::async_trait;

use toolgate_application::CommentSink;
use toolgate_domain::{FileOutcome, Result};

/// Renders review outcomes for a terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a console sink
    pub fn new() -> Self {
        Self
    }

    /// Render outcomes to the text the sink will print
    pub fn render(outcomes: &[FileOutcome]) -> String {
        let mut out = String::new();
        for outcome in outcomes {
            out.push_str(&outcome.path);
            out.push('\n');
            for comment in &outcome.comments {
                let mut lines = comment.body.lines();
                if let Some(first) = lines.next() {
                    out.push_str(&format!("  line {}: {first}\n", comment.line));
                }
                for continuation in lines {
                    out.push_str(&format!("          {continuation}\n"));
                }
            }
        }
        out.push_str(&render_summary(outcomes));
        out
    }
}

fn render_summary(outcomes: &[FileOutcome]) -> String {
    let failed = outcomes.iter().filter(|o| o.failed).count();
    let invalid: usize = outcomes.iter().map(|o| o.invalid).sum();
    format!(
        "{} file(s) reviewed, {} schema issue(s), {} file(s) failed\n",
        outcomes.len(),
        invalid,
        failed
    )
}

#[async_trait]
impl CommentSink for ConsoleSink {
    async fn publish(&self, outcomes: &[FileOutcome]) -> Result<()> {
        print!("{}", Self::render(outcomes));
        Ok(())
    }
}
