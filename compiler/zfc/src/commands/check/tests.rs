use pretty_assertions::assert_eq;
use zf_diagnostic::emitter::{ColorMode, JsonEmitter, TerminalEmitter};

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

const SHOP: &str = r#"{
    "types": [
        {
            "name": "Person", "kind": "class", "formattable": true,
            "constructors": [[]],
            "location": { "file": "Person.cs", "line": 3, "column": 1 },
            "members": [
                { "name": "Name", "type": "string", "virtual": true, "index": 0,
                  "location": { "file": "Person.cs", "line": 5, "column": 5 } },
                { "name": "Age", "type": "int", "index": 1,
                  "location": { "file": "Person.cs", "line": 6, "column": 5 } }
            ]
        },
        { "name": "Tag", "kind": "class" },
        {
            "name": "Point", "kind": "struct", "formattable": true,
            "constructors": [["int", "int"]],
            "location": { "file": "Point.cs", "line": 1, "column": 1 },
            "members": [
                { "name": "X", "kind": "field", "type": "int", "index": 0 },
                { "name": "Y", "kind": "field", "type": "int", "index": 2 }
            ]
        }
    ]
}"#;

const WALLET: &str = r#"{
    "types": [
        {
            "name": "Wallet", "kind": "class", "formattable": true,
            "constructors": [[]],
            "members": [
                { "name": "Balance", "type": "Acme.Money", "virtual": true, "index": 150 }
            ]
        }
    ]
}"#;

fn run_json(json: &str, config: &CheckConfig) -> (CheckSummary, serde_json::Value) {
    let mut output = Vec::new();
    let summary = {
        let mut emitter = JsonEmitter::new(&mut output);
        check_source(json, config, &mut emitter).unwrap()
    };
    (summary, serde_json::from_slice(&output).unwrap())
}

fn codes(value: &serde_json::Value) -> Vec<&str> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["code"].as_str().unwrap())
        .collect()
}

// -- Argument parsing --

#[test]
fn test_parse_defaults() {
    let options = CheckOptions::parse(&args(&["graph.json"])).unwrap();
    assert_eq!(
        options,
        CheckOptions {
            graph: PathBuf::from("graph.json"),
            ..CheckOptions::default()
        }
    );
}

#[test]
fn test_parse_all_flags_in_any_position() {
    let options = CheckOptions::parse(&args(&[
        "--deny-warnings",
        "--allow=System.Guid",
        "graph.json",
        "--format=json",
        "--color=never",
        "--allow=Acme.Money",
        "--config=zf.json",
    ]))
    .unwrap();

    assert_eq!(options.graph, PathBuf::from("graph.json"));
    assert_eq!(options.config, Some(PathBuf::from("zf.json")));
    assert_eq!(options.allow, vec!["System.Guid", "Acme.Money"]);
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.color, ColorMode::Never);
    assert!(options.deny_warnings);
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(matches!(
        CheckOptions::parse(&args(&[])),
        Err(CliError::MissingArgument(_))
    ));
    assert!(matches!(
        CheckOptions::parse(&args(&["a.json", "--verbose"])),
        Err(CliError::UnknownOption(opt)) if opt == "--verbose"
    ));
    assert!(matches!(
        CheckOptions::parse(&args(&["a.json", "b.json"])),
        Err(CliError::UnexpectedArgument(arg)) if arg == "b.json"
    ));
    assert!(matches!(
        CheckOptions::parse(&args(&["a.json", "--format=xml"])),
        Err(CliError::InvalidValue { option: "--format", .. })
    ));
    assert!(matches!(
        CheckOptions::parse(&args(&["a.json", "--color=sometimes"])),
        Err(CliError::InvalidValue { option: "--color", .. })
    ));
}

// -- Analysis --

#[test]
fn test_roots_report_in_declaration_order() {
    let (summary, output) = run_json(SHOP, &CheckConfig::default());

    assert_eq!(
        summary,
        CheckSummary {
            roots: 2,
            errors: 2,
            warnings: 0,
        }
    );
    assert_eq!(codes(&output), vec!["E1004", "E2001"]);
    assert_eq!(output[0]["labels"][0]["file"], "Person.cs");
    assert_eq!(output[0]["labels"][0]["line"], 6);
}

#[test]
fn test_terminal_output_ends_with_summary() {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        check_source(SHOP, &CheckConfig::default(), &mut emitter).unwrap();
    }
    let text = String::from_utf8(output).unwrap();

    assert!(text.starts_with("error[E1004]:"));
    assert!(text.contains("error[E2001]:"));
    assert!(text.ends_with("error: aborting due to 2 previous errors\n"));
}

#[test]
fn test_unknown_type_is_a_graph_error() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    let err = check_source(WALLET, &CheckConfig::default(), &mut emitter).unwrap_err();

    assert!(matches!(err, CliError::Graph(_)));
    assert!(err.to_string().contains("Acme.Money"));
}

#[test]
fn test_allowed_names_become_terminal() {
    let config = CheckConfig::default().allow("Acme.Money");
    let (summary, output) = run_json(WALLET, &config);

    assert_eq!(summary.errors, 0);
    assert_eq!(summary.warnings, 1);
    assert_eq!(codes(&output), vec!["W1001"]);
}

#[test]
fn test_warnings_fail_only_when_denied() {
    let summary = CheckSummary {
        roots: 1,
        errors: 0,
        warnings: 1,
    };
    assert!(!summary.fails(false));
    assert!(summary.fails(true));

    let clean = CheckSummary::default();
    assert!(!clean.fails(true));

    let broken = CheckSummary {
        errors: 1,
        ..CheckSummary::default()
    };
    assert!(broken.fails(false));
}

#[test]
fn test_empty_graph_is_clean() {
    let (summary, output) = run_json(r#"{ "types": [] }"#, &CheckConfig::default());
    assert_eq!(summary, CheckSummary::default());
    assert_eq!(output, serde_json::json!([]));
}

// -- Configuration --

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("zfc-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_config_merges_allow_flags() {
    let path = scratch_file(
        "config.json",
        r#"{ "additional_allowed_type_names": ["System.Guid"], "index_warning_threshold": 10 }"#,
    );
    let options = CheckOptions {
        config: Some(path.clone()),
        allow: vec!["Acme.Money".to_string()],
        ..CheckOptions::default()
    };

    let config = load_config(&options).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.index_warning_threshold, 10);
    assert!(config.additional_allowed_type_names.contains("System.Guid"));
    assert!(config.additional_allowed_type_names.contains("Acme.Money"));
}

#[test]
fn test_load_config_reports_unknown_keys() {
    let path = scratch_file("bad-config.json", r#"{ "threshold": 10 }"#);
    let options = CheckOptions {
        config: Some(path.clone()),
        ..CheckOptions::default()
    };

    let err = load_config(&options).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(err, CliError::Config { .. }));
}

#[test]
fn test_missing_files_report_their_path() {
    let options = CheckOptions {
        graph: PathBuf::from("/nonexistent/zfc/graph.json"),
        ..CheckOptions::default()
    };
    let err = check_file(&options).unwrap_err();

    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/zfc/graph.json"));
}
