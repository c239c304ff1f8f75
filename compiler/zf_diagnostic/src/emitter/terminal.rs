//! Terminal Emitter
//!
//! Human-readable output, one block per diagnostic:
//!
//! ```text
//! error[E0001]: type `Address` must be annotated as formattable
//!   --> Person.cs:7:5: type must be annotated as formattable
//!       Address.cs:1:1: `Address` declared here
//!   = note: ...
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI styles used by the emitter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Style {
    Error,
    Warning,
    Emphasis,
    Related,
}

impl Style {
    const RESET: &'static str = "\x1b[0m";

    fn escape(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Emphasis => "\x1b[1m",
            Style::Related => "\x1b[1;34m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
        }
    }
}

/// When to emit ANSI escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` is only consulted for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(()),
        }
    }
}

/// Closing line for a run, `None` when nothing was reported.
fn summary_line(errors: usize, warnings: usize) -> Option<(Severity, String)> {
    let warned = match warnings {
        0 => None,
        1 => Some("1 warning emitted".to_string()),
        n => Some(format!("{n} warnings emitted")),
    };
    let aborted = match errors {
        0 => None,
        1 => Some("aborting due to previous error".to_string()),
        n => Some(format!("aborting due to {n} previous errors")),
    };

    match (aborted, warned) {
        (Some(aborted), Some(warned)) => Some((Severity::Error, format!("{aborted}; {warned}"))),
        (Some(aborted), None) => Some((Severity::Error, aborted)),
        (None, Some(warned)) => Some((Severity::Warning, warned)),
        (None, None) => None,
    }
}

/// Writes diagnostics as text, optionally colored.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn stdout(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stdout> {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }

    fn paint(&mut self, style: Style, text: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{}{text}{}", style.escape(), Style::RESET)
        } else {
            self.writer.write_all(text.as_bytes())
        }
    }

    fn write_diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let severity_style = Style::for_severity(diagnostic.severity);
        self.paint(severity_style, &diagnostic.severity.to_string())?;
        self.paint(Style::Emphasis, &format!("[{}]", diagnostic.code))?;
        writeln!(self.writer, ": {}", diagnostic.message)?;

        for label in &diagnostic.labels {
            let (marker, style) = if label.is_primary {
                ("-->", severity_style)
            } else {
                ("   ", Style::Related)
            };
            write!(self.writer, "  {marker} {}: ", label.location)?;
            self.paint(style, &label.message)?;
            writeln!(self.writer)?;
        }

        for note in &diagnostic.notes {
            write!(self.writer, "  = ")?;
            self.paint(Style::Emphasis, "note")?;
            writeln!(self.writer, ": {note}")?;
        }

        writeln!(self.writer)
    }
}

// Output is best-effort: a closed pipe must not abort the check.
impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = self.write_diagnostic(diagnostic);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if let Some((severity, text)) = summary_line(error_count, warning_count) {
            let _ = self
                .paint(Style::for_severity(severity), &severity.to_string())
                .and_then(|()| writeln!(self.writer, ": {text}"));
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
