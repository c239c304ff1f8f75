//! The `codes` command: list every diagnostic code.

use std::fmt::Write;

use zf_diagnostic::ErrorCode;

/// One line per code: code, severity, kind, title.
pub fn code_table() -> String {
    let kind_width = ErrorCode::ALL
        .iter()
        .map(|code| code.kind().len())
        .max()
        .unwrap_or(0);

    let mut table = String::new();
    for code in ErrorCode::ALL {
        let _ = writeln!(
            table,
            "{code}  {:<7}  {:<kind_width$}  {}",
            code.severity().to_string(),
            code.kind(),
            code.title()
        );
    }
    table
}

#[cfg(test)]
mod tests;
