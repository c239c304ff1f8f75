//! Command handlers for the `zfc` CLI.
//!
//! Handlers return data or write to a caller-supplied writer; only the
//! binary decides exit codes.

mod check;
mod codes;
mod explain;

pub use check::{
    check_file, check_source, load_config, CheckOptions, CheckSummary, OutputFormat,
};
pub use codes::code_table;
pub use explain::explain_error;
