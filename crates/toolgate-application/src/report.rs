//! Report assembly
//!
//! Turns per-tool findings into review comments. Thin by design: the
//! messages mirror what a reviewer expects to read on a pull request, and
//! nothing here carries state.

use toolgate_domain::{ReviewComment, ValidationVerdict};

/// What the pipeline learned about one tool class
#[derive(Debug, Clone)]
pub enum ToolFinding {
    /// The class qualified but exposed no usable schema
    NoSchema {
        /// Name of the tool class
        class_name: String,
    },
    /// The oracle returned a verdict for the class's definition
    Judged {
        /// Name of the tool class
        class_name: String,
        /// The oracle's verdict
        verdict: ValidationVerdict,
    },
    /// The oracle failed for this one definition
    OracleFailed {
        /// Name of the tool class
        class_name: String,
        /// Description of the failure
        message: String,
    },
}

/// Assemble the ordered comment list for one analyzed file
pub fn assemble(path: &str, findings: &[ToolFinding]) -> Vec<ReviewComment> {
    if findings.is_empty() {
        return vec![ReviewComment::file_level(
            path,
            format!("No tools found in file '{path}'"),
        )];
    }

    findings
        .iter()
        .map(|finding| ReviewComment::file_level(path, render_finding(finding)))
        .collect()
}

/// Count the findings that should gate a CI run: invalid verdicts and
/// definitions whose validation could not be completed
pub fn invalid_count(findings: &[ToolFinding]) -> usize {
    findings
        .iter()
        .filter(|finding| match finding {
            ToolFinding::Judged { verdict, .. } => !verdict.valid,
            ToolFinding::OracleFailed { .. } => true,
            ToolFinding::NoSchema { .. } => false,
        })
        .count()
}

fn render_finding(finding: &ToolFinding) -> String {
    match finding {
        ToolFinding::NoSchema { class_name } => {
            format!("No schema found for tool class '{class_name}'")
        }
        ToolFinding::Judged {
            class_name,
            verdict,
        } if verdict.valid => {
            format!("Tool '{class_name}' seems to have a valid schema")
        }
        ToolFinding::Judged {
            class_name,
            verdict,
        } => render_schema_issue(class_name, verdict),
        ToolFinding::OracleFailed {
            class_name,
            message,
        } => {
            format!("Schema validation could not be completed for '{class_name}': {message}")
        }
    }
}

fn render_schema_issue(class_name: &str, verdict: &ValidationVerdict) -> String {
    let mut message = format!("⚠️ **Schema issue in {class_name}**\n");
    if !verdict.missing_fields.is_empty() {
        message.push_str(&format!(
            "Missing fields: {}\n",
            verdict.missing_fields.join(", ")
        ));
    }
    if !verdict.errors.is_empty() {
        message.push_str("Errors:\n- ");
        message.push_str(&verdict.errors.join("\n- "));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_findings_yield_no_tools_comment() {
        let comments = assemble("tools/weather.py", &[]);
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].line, 1);
        assert_eq!(comments[0].body, "No tools found in file 'tools/weather.py'");
    }

    #[test]
    fn test_every_finding_yields_exactly_one_comment() {
        let findings = vec![
            ToolFinding::NoSchema {
                class_name: "A".into(),
            },
            ToolFinding::Judged {
                class_name: "B".into(),
                verdict: ValidationVerdict::valid(),
            },
            ToolFinding::OracleFailed {
                class_name: "C".into(),
                message: "timed out".into(),
            },
        ];
        let comments = assemble("f.py", &findings);
        assert_eq!(comments.len(), 3);
        assert!(comments[0].body.contains("No schema found for tool class 'A'"));
        assert!(comments[1].body.contains("valid schema"));
        assert!(comments[2].body.contains("could not be completed for 'C'"));
    }

    #[test]
    fn test_schema_issue_lists_missing_fields_and_errors() {
        let verdict = ValidationVerdict::from_violations(
            vec!["'type' must be the string \"function\"".into()],
            vec!["function.strict".into()],
        );
        let findings = vec![ToolFinding::Judged {
            class_name: "GetWeather".into(),
            verdict,
        }];
        let body = &assemble("f.py", &findings)[0].body;
        assert!(body.contains("Schema issue in GetWeather"));
        assert!(body.contains("Missing fields: function.strict"));
        assert!(body.contains("Errors:\n- 'type'"));
    }

    #[test]
    fn test_invalid_count_gates_on_bad_verdicts_and_oracle_failures() {
        let findings = vec![
            ToolFinding::NoSchema {
                class_name: "A".into(),
            },
            ToolFinding::Judged {
                class_name: "B".into(),
                verdict: ValidationVerdict::from_violations(vec!["bad".into()], vec![]),
            },
            ToolFinding::Judged {
                class_name: "C".into(),
                verdict: ValidationVerdict::valid(),
            },
            ToolFinding::OracleFailed {
                class_name: "D".into(),
                message: "boom".into(),
            },
        ];
        assert_eq!(invalid_count(&findings), 2);
    }
}
