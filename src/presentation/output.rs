//! Output Rendering
//!
//! Text and NDJSON renderings of command results.

use std::io::{self, Write};

use crate::application::{CheckResult, PipelineReport};
use crate::config::ConfigWarning;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    warn: &'static str,
    write: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            warn: "⚠",
            write: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            warn: "[WARN]",
            write: "->",
        }
    }
}

/// Text renderer for command results
pub struct TextRenderer {
    /// Whether to use unicode icons
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    /// Summary of a pipeline run
    pub fn render_report(&self, report: &PipelineReport) -> String {
        let icons = self.icons();
        let mut out = String::new();

        for path in &report.written {
            out.push_str(&format!("  {} {}\n", icons.write, path.display()));
        }

        if self.verbose > 0 {
            out.push_str(&format!(
                "  document nodes: {}, flattened nodes: {}, pruned: {}\n",
                report.document_nodes, report.flattened_nodes, report.pruned
            ));
        }

        let status = if report.diagnostics == 0 {
            icons.check
        } else {
            icons.warn
        };
        out.push_str(&format!(
            "{} {} descriptors, {} diagnostics\n",
            status, report.descriptors, report.diagnostics
        ));
        out
    }

    /// Summary of a document check
    pub fn render_check(&self, result: &CheckResult) -> String {
        format!(
            "{} {} nodes, {} copies, {} module outputs\n",
            self.icons().check,
            result.nodes,
            result.copies,
            result.module_outputs
        )
    }

    pub fn render_warning(&self, warning: &ConfigWarning) -> String {
        format!("{} {}\n", self.icons().warn, warning)
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn report_event(report: &PipelineReport) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "run",
        "report": report,
    })
}

pub fn check_event(result: &CheckResult) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "check",
        "result": result,
    })
}

pub fn warning_event(warning: &ConfigWarning) -> serde_json::Value {
    serde_json::json!({
        "event": "config_warning",
        "key": warning.key,
        "file": warning.file.display().to_string(),
        "line": warning.line,
    })
}
