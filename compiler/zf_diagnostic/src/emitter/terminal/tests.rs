use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;
use zf_ir::Location;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::new(ErrorCode::E0001)
        .with_message("type `Address` must be annotated as formattable")
        .with_label(Location::new("Person.cs", 7, 5), "type must be annotated")
        .with_secondary_label(Location::new("Address.cs", 1, 1), "`Address` declared here")
        .with_note("annotate the type")
}

fn render(mode: ColorMode, f: impl FnOnce(&mut TerminalEmitter<&mut Vec<u8>>)) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
    f(&mut emitter);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(ColorMode::Never, |e| e.emit(&sample_diagnostic()));

    assert!(text.starts_with("error[E0001]: type `Address`"));
    assert!(text.contains("  --> Person.cs:7:5: type must be annotated"));
    assert!(text.contains("      Address.cs:1:1: `Address` declared here"));
    assert!(text.contains("  = note: annotate the type"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(ColorMode::Always, |e| e.emit(&sample_diagnostic()));
    assert!(text.contains(Style::Error.escape()));
    assert!(text.contains(Style::Related.escape()));
    assert!(text.contains(Style::RESET));
}

#[test]
fn test_color_mode_auto_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert_eq!("sometimes".parse::<ColorMode>(), Err(()));
}

#[test]
fn test_summary_errors_and_warnings() {
    let text = render(ColorMode::Never, |e| e.emit_summary(2, 1));
    assert_eq!(text, "error: aborting due to 2 previous errors; 1 warning emitted\n");

    let text = render(ColorMode::Never, |e| e.emit_summary(1, 0));
    assert_eq!(text, "error: aborting due to previous error\n");
}

#[test]
fn test_summary_warnings_only() {
    let text = render(ColorMode::Never, |e| e.emit_summary(0, 3));
    assert_eq!(text, "warning: 3 warnings emitted\n");
}

#[test]
fn test_summary_line_severity() {
    assert_eq!(summary_line(0, 0), None);
    assert_eq!(
        summary_line(0, 1),
        Some((Severity::Warning, "1 warning emitted".to_string()))
    );
    assert_eq!(
        summary_line(3, 2),
        Some((
            Severity::Error,
            "aborting due to 3 previous errors; 2 warnings emitted".to_string()
        ))
    );
}

#[test]
fn test_summary_clean_is_silent() {
    let text = render(ColorMode::Never, |e| e.emit_summary(0, 0));
    assert!(text.is_empty());
}

#[test]
fn test_warning_header() {
    let warning = Diagnostic::new(ErrorCode::W1001).with_message("index 150 is large");
    let text = render(ColorMode::Never, |e| e.emit(&warning));
    assert!(text.starts_with("warning[W1001]: index 150 is large"));
}
