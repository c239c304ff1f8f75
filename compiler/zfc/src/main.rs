//! Formattable-type checker CLI

use zfc::commands::{check_file, code_table, explain_error, CheckOptions};
use zfc::CliError;

fn main() {
    zfc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let options = CheckOptions::parse(&args[2..]).unwrap_or_else(|err| fail(&err));
            match check_file(&options) {
                Ok(summary) => {
                    if summary.fails(options.deny_warnings) {
                        std::process::exit(1);
                    }
                }
                Err(err) => fail(&err),
            }
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: zfc explain <CODE>");
                eprintln!("Example: zfc explain E1002");
                std::process::exit(1);
            }
            match explain_error(&args[2]) {
                Ok(doc) => println!("{doc}"),
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!();
                    eprintln!("Run `zfc codes` to list every code.");
                    std::process::exit(1);
                }
            }
        }
        "codes" => {
            print!("{}", code_table());
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("zfc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(err: &CliError) -> ! {
    eprintln!("error: {err}");
    if matches!(
        err,
        CliError::UnknownOption(_)
            | CliError::UnexpectedArgument(_)
            | CliError::InvalidValue { .. }
            | CliError::MissingArgument(_)
    ) {
        eprintln!();
        eprintln!("Usage: zfc check <graph.json> [options]");
        eprintln!("Run `zfc help` for the list of options.");
    }
    std::process::exit(1);
}

fn print_usage() {
    println!("Formattable-type checker");
    println!();
    println!("Usage: zfc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <graph.json>   Check every formattable type in a type graph");
    println!("  explain <code>       Explain a diagnostic code (e.g., E1002)");
    println!("  codes                List every diagnostic code");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --config=<file>        JSON checker configuration");
    println!("  --allow=<TypeName>     Treat a type as serializable as-is (repeatable)");
    println!("  --format=<fmt>         Output: terminal (default), json");
    println!("  --color=<when>         Colors: auto (default), always, never");
    println!("  --deny-warnings        Exit with failure on warnings too");
    println!();
    println!("Examples:");
    println!("  zfc check types.json");
    println!("  zfc check types.json --allow=System.Guid --deny-warnings");
    println!("  zfc check types.json --format=json > report.json");
    println!("  zfc explain E2001");
    println!("  RUST_LOG=zf_check=trace zfc check types.json");
}
