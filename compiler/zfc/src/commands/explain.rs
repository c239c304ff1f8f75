//! The `explain` command: display documentation for a diagnostic code.

use zf_diagnostic::{ErrorCode, ErrorDocs};

use crate::CliError;

/// Look up the documentation for a code (`E1002`) or kind (`DuplicateIndex`).
///
/// Every code ships with documentation, so an unknown string is the only
/// failure.
pub fn explain_error(code_str: &str) -> Result<&'static str, CliError> {
    code_str
        .parse::<ErrorCode>()
        .ok()
        .and_then(ErrorDocs::get)
        .ok_or_else(|| CliError::UnknownCode(code_str.to_string()))
}
