// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint result reporting.

use crate::cli::args::OutputFormat;
use crate::config::CommitRule;
use console::style;

/// The shape every commit message is expected to follow.
pub const COMMIT_FORMAT: &str = "<type>(<scope>): <subject>
<BLANK LINE>
<body>
<BLANK LINE>
<footer>";

/// Describe the format a rule accepts, for failure messages.
pub fn expected_format(rule: &CommitRule) -> String {
    let mut output = COMMIT_FORMAT.to_string();

    if rule.types.is_empty() {
        output.push_str("\n\n<type>: any (no type prefix required)");
    } else {
        output.push_str(&format!("\n\n<type>: one of {}", rule.types.join(", ")));
    }

    output.push_str(if rule.scope.required {
        "\n<scope>: required"
    } else {
        "\n<scope>: optional"
    });

    if rule.allows_reverting {
        output.push_str("\n\nrevert: <header>\n<BLANK LINE>\nThis reverts commit <hash>");
    }

    output
}

/// Result of linting a single commit message.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// The message as it was matched, after normalization.
    pub message: String,
    /// Whether the message is accepted.
    pub passed: bool,
    /// Whether linting was bypassed (disabled rule or ignoring pattern).
    pub skipped: bool,
    /// Sub-matches found, collected in verbose mode only.
    pub matches: Vec<String>,
    /// Description of the accepted format.
    pub expected_format: String,
}

impl LintReport {
    /// A report for a message that was not linted.
    pub fn skipped(message: String, expected_format: String) -> Self {
        Self {
            message,
            passed: true,
            skipped: true,
            matches: Vec::new(),
            expected_format,
        }
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>, verbose: bool) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => {
                let text = self.render_text(verbose);
                if !text.is_empty() {
                    println!("{}", text);
                }
            }
        }
    }

    /// Render in text format. Passing messages only produce output in verbose mode.
    pub fn render_text(&self, verbose: bool) -> String {
        let mut output = String::new();

        if verbose {
            if self.skipped {
                output.push_str(&format!("{}\n", style("Linting skipped").dim()));
            } else {
                output.push_str(&format!("{}\n", self.matches.len()));
                for m in &self.matches {
                    output.push_str(&format!("{}\n", m));
                }
            }
        }

        if !self.passed {
            output.push_str(&format!(
                "{}\n",
                style(format!(
                    "\nCommit message:\n------------------------\n{}\n------------------------\ndid not pass validation",
                    self.message
                ))
                .red()
                .bold()
            ));
            output.push_str(&format!(
                "{}\n",
                style(
                    "\n-------------------------------------------\n\
                     Please check and follow the commit pattern:\n\
                     -------------------------------------------"
                )
                .yellow()
                .bold()
            ));
            output.push_str(&format!(
                "{}\n",
                style(format!("\n{}\n", self.expected_format)).green().bold()
            ));
        } else if verbose && !self.skipped {
            output.push_str(&format!(
                "{}\n",
                style(format!("\nCommit message:\n```\n{}\n```\npassed", self.message))
                    .green()
                    .bold()
            ));
        }

        output.trim_end_matches('\n').to_string()
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }

    /// The report as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        let expected = (!self.passed).then_some(&self.expected_format);
        serde_json::json!({
            "passed": self.passed,
            "skipped": self.skipped,
            "message": self.message,
            "matches": self.matches,
            "expected": expected,
        })
    }
}
