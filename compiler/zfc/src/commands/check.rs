//! The `check` command: analyze every formattable type in a JSON type graph.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use zf_check::{CheckConfig, Checker};
use zf_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use zf_ir::TypeGraph;

use crate::CliError;

/// How diagnostics are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// Parsed `check` arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub graph: PathBuf,
    pub config: Option<PathBuf>,
    /// Extra terminal type names from `--allow=`, merged into the config.
    pub allow: Vec<String>,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub deny_warnings: bool,
}

impl CheckOptions {
    /// Parse the arguments following `check`. Flags may appear before or
    /// after the graph path.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = CheckOptions::default();
        let mut graph = None;

        for arg in args {
            if let Some(path) = arg.strip_prefix("--config=") {
                options.config = Some(PathBuf::from(path));
            } else if let Some(name) = arg.strip_prefix("--allow=") {
                options.allow.push(name.to_string());
            } else if let Some(value) = arg.strip_prefix("--format=") {
                options.format = value.parse().map_err(|()| CliError::InvalidValue {
                    option: "--format",
                    value: value.to_string(),
                })?;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                options.color = value.parse().map_err(|()| CliError::InvalidValue {
                    option: "--color",
                    value: value.to_string(),
                })?;
            } else if arg == "--deny-warnings" {
                options.deny_warnings = true;
            } else if arg.starts_with('-') {
                return Err(CliError::UnknownOption(arg.clone()));
            } else if graph.is_none() {
                graph = Some(PathBuf::from(arg));
            } else {
                return Err(CliError::UnexpectedArgument(arg.clone()));
            }
        }

        options.graph = graph.ok_or(CliError::MissingArgument("type graph path"))?;
        Ok(options)
    }
}

/// Totals over every analyzed root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub roots: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl CheckSummary {
    /// Whether the run should exit with a failure status.
    pub fn fails(&self, deny_warnings: bool) -> bool {
        self.errors > 0 || (deny_warnings && self.warnings > 0)
    }
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the checker configuration: the `--config` file if any, plus every
/// `--allow` name.
pub fn load_config(options: &CheckOptions) -> Result<CheckConfig, CliError> {
    let mut config = match &options.config {
        Some(path) => {
            serde_json::from_str(&read(path)?).map_err(|source| CliError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => CheckConfig::default(),
    };
    config.extend_allowed(options.allow.iter().cloned());
    Ok(config)
}

/// Analyze a JSON type graph and send every diagnostic to `emitter`, root by
/// root in declaration order.
pub fn check_source<E>(
    json: &str,
    config: &CheckConfig,
    emitter: &mut E,
) -> Result<CheckSummary, CliError>
where
    E: DiagnosticEmitter + ?Sized,
{
    let graph = TypeGraph::from_json_with_implicit(json, &config.additional_allowed_type_names)?;
    let reports = Checker::new(config.clone()).check_graph(&graph);

    let mut summary = CheckSummary {
        roots: reports.len(),
        ..CheckSummary::default()
    };
    for report in &reports {
        summary.errors += report.error_count();
        summary.warnings += report.warning_count();
        emitter.emit_all(&report.diagnostics);
    }

    tracing::debug!(
        roots = summary.roots,
        errors = summary.errors,
        warnings = summary.warnings,
        "check complete"
    );
    emitter.emit_summary(summary.errors, summary.warnings);
    emitter.flush();
    Ok(summary)
}

/// Run `check` against the file named in `options`, printing to stdout.
pub fn check_file(options: &CheckOptions) -> Result<CheckSummary, CliError> {
    let json = read(&options.graph)?;
    let config = load_config(options)?;

    let mut emitter: Box<dyn DiagnosticEmitter> = match options.format {
        OutputFormat::Terminal => Box::new(TerminalEmitter::<io::Stdout>::stdout(
            options.color,
            io::stdout().is_terminal(),
        )),
        OutputFormat::Json => Box::new(JsonEmitter::new(io::stdout())),
    };
    check_source(&json, &config, emitter.as_mut())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
