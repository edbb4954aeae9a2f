//! CLI front door for `boolmin`. The counterpart of chalk's `chalk-repl`:
//! a thin adapter that knows about JSON and argv so the library itself
//! doesn't have to.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use boolmin::{canonicalize_strs, format, minimize};

#[derive(Parser, Debug)]
#[command(name = "boolmin", about = "Derive and print a minimized boolean formula")]
struct Args {
    /// Path to a JSON truth table (array of `{"inputs": [...], "output": "..."}` rows).
    #[arg(long)]
    input: PathBuf,

    /// Which formula to print.
    #[arg(long, value_enum, default_value = "minimal")]
    form: Form,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Form {
    Dnf,
    Cnf,
    Minimal,
}

#[derive(Debug, Deserialize)]
struct JsonRow {
    inputs: Vec<String>,
    output: String,
}

#[derive(Debug)]
enum CliError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Lib(boolmin::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "{e}"),
            CliError::Json(e) => write!(f, "{e}"),
            CliError::Lib(e) => write!(f, "{e}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<boolmin::Error> for CliError {
    fn from(e: boolmin::Error) -> Self {
        CliError::Lib(e)
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let text = fs::read_to_string(&args.input)?;
    let rows: Vec<JsonRow> = serde_json::from_str(&text)?;

    let table = canonicalize_strs(
        rows.iter()
            .map(|row| (row.inputs.iter().map(String::as_str), row.output.as_str())),
    )?;

    // `minimal`/`dnf_from_table`/`cnf_from_table` need variable names; the
    // CLI has no enumerator registry to draw them from (its input is a
    // static table, not a predicate), so it names positions by index the
    // same way the enumerator would.
    let names: Vec<String> = (0..table.keys().next().map_or(0, |k| k.len()))
        .map(|i| format!("v[{i}]"))
        .collect();

    Ok(match args.form {
        Form::Minimal => format::minimal(&minimize(&table), &names),
        Form::Dnf => format::dnf_from_table(&table, &names),
        Form::Cnf => format::cnf_from_table(&table, &names),
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(formula) => println!("{formula}"),
        Err(e) => {
            eprintln!("error: {e}");
            exit(1);
        }
    }
}
