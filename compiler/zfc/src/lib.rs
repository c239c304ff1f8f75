//! Command-line driver for the formattable-type checker.
//!
//! The binary is a thin argument dispatcher; every command lives in
//! [`commands`] and reports failures as [`CliError`] so it can be tested
//! without spawning a process.

use std::path::PathBuf;
use std::sync::Once;

use thiserror::Error;
use zf_ir::GraphError;

pub mod commands;

/// Failure of a CLI command before or around analysis.
///
/// Diagnostics found by the checker are not errors here; they are printed
/// and reflected in the exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config `{}`: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("invalid value `{value}` for `{option}`")]
    InvalidValue { option: &'static str, value: String },

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unknown error code `{0}`")]
    UnknownCode(String),
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber once per process, only when `RUST_LOG` is set.
///
/// `RUST_LOG=zf_check=trace` shows every walker decision.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
