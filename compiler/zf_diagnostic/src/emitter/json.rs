//! JSON Emitter
//!
//! Machine-readable diagnostic output: one JSON array holding every
//! diagnostic, written when the emitter is flushed.

use std::io::Write;

use serde::Serialize;
use zf_ir::Location;

use crate::{Diagnostic, DiagnosticArg, Label};

use super::DiagnosticEmitter;

#[derive(Serialize)]
struct LabelView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
    line: u32,
    column: u32,
    message: &'a str,
    primary: bool,
}

impl<'a> From<&'a Label> for LabelView<'a> {
    fn from(label: &'a Label) -> Self {
        let Location { file, line, column } = &label.location;
        LabelView {
            file: file.as_deref(),
            line: *line,
            column: *column,
            message: &label.message,
            primary: label.is_primary,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
enum ArgView<'a> {
    Type(&'a str),
    Member(&'a str),
    Index(i32),
}

impl<'a> From<&'a DiagnosticArg> for ArgView<'a> {
    fn from(arg: &'a DiagnosticArg) -> Self {
        match arg {
            DiagnosticArg::Type(name) => ArgView::Type(name),
            DiagnosticArg::Member(name) => ArgView::Member(name),
            DiagnosticArg::Index(index) => ArgView::Index(*index),
        }
    }
}

#[derive(Serialize)]
struct DiagnosticView<'a> {
    code: &'static str,
    kind: &'static str,
    severity: String,
    message: &'a str,
    labels: Vec<LabelView<'a>>,
    args: Vec<ArgView<'a>>,
    notes: &'a [String],
}

impl<'a> From<&'a Diagnostic> for DiagnosticView<'a> {
    fn from(diag: &'a Diagnostic) -> Self {
        DiagnosticView {
            code: diag.code.as_str(),
            kind: diag.kind(),
            severity: diag.severity.to_string(),
            message: &diag.message,
            labels: diag.labels.iter().map(LabelView::from).collect(),
            args: diag.args.iter().map(ArgView::from).collect(),
            notes: &diag.notes,
        }
    }
}

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    entries: Vec<serde_json::Value>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if let Ok(value) = serde_json::to_value(DiagnosticView::from(diagnostic)) {
            self.entries.push(value);
        }
    }

    /// Write the collected array. Flushing twice writes two arrays.
    fn flush(&mut self) {
        let entries = std::mem::take(&mut self.entries);
        let _ = serde_json::to_writer_pretty(&mut self.writer, &entries);
        let _ = writeln!(self.writer);
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // JSON output doesn't need a summary - the data speaks for itself
    }
}
