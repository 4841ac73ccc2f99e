use std::{fs, process::ExitCode};

use clap::Parser;
use formulae::{Environment, Formula};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// formulae evaluates a formula and prints its result.
///
/// Statements are separated by `;`; the value of the last one is printed.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells formulae to read the formula from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable before evaluation, as `NAME=VALUE`. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Prints the parsed formula in normalized form before evaluating it.
    #[arg(long)]
    show_ast: bool,

    /// Prints every variable after evaluation.
    #[arg(long)]
    dump_vars: bool,

    contents: String,
}

fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

/// Installs a log subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=formulae=trace`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true).with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let formula = match Formula::parse(&source) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if args.show_ast {
        println!("{formula}");
    }

    let mut env = Environment::new();
    for (name, value) in args.vars {
        env.set_variable(name, value);
    }

    match formula.evaluate(&mut env.variables, &env.functions) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    }

    if args.dump_vars {
        let mut names: Vec<_> = env.variables.iter().collect();
        names.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in names {
            println!("{name} = {value}");
        }
    }

    ExitCode::SUCCESS
}
