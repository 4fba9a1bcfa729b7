//! descent CLI entry point
//!
//! Parses a file, an inline snippet or stdin and prints the resulting tree.

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser as ClapParser;
use descent::{lexer::lexer::tokenize, parse_with_options, render_error, Ast, AstMode, ParserOptions};
use tracing::debug;

#[derive(ClapParser, Debug)]
#[command(name = "descent")]
#[command(version)]
#[command(about = "Tokenize and parse programs into an AST", long_about = None)]
struct Cli {
    /// Source file to parse (reads stdin when neither FILE nor -e is given)
    #[arg(value_name = "FILE", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Parse SOURCE given on the command line
    #[arg(short = 'e', long = "expression", value_name = "SOURCE")]
    expression: Option<String>,

    /// Node representation of the output
    #[arg(long, value_enum, default_value_t = AstMode::Default)]
    mode: AstMode,

    /// Print the token stream instead of the tree
    #[arg(long)]
    tokens: bool,

    /// Single-line JSON output; S-expressions are then printed as JSON arrays
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();

    let (source, file_name) = match read_source(&cli) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    debug!(file = %file_name, bytes = source.len(), "read source");

    let output = if cli.tokens {
        tokenize(&source, Some(file_name)).map(|tokens| to_json(&tokens, cli.compact))
    } else {
        let options = ParserOptions {
            mode: cli.mode,
            file_name: Some(file_name),
        };
        parse_with_options(&source, &options).map(|ast| match ast {
            Ast::SExpression(sexpr) if !cli.compact => sexpr.to_string(),
            ast => to_json(&ast, cli.compact),
        })
    };

    match output {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}", render_error(&err, &source));
            ExitCode::FAILURE
        }
    }
}

/// Source text and the name reported in error positions.
fn read_source(cli: &Cli) -> io::Result<(String, String)> {
    if let Some(expression) = &cli.expression {
        return Ok((expression.clone(), String::from("shell")));
    }

    match &cli.file {
        Some(path) => {
            let source = read_to_string(path)?;
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            Ok((source, name))
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((source, String::from("stdin")))
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> String {
    let result = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };

    result.unwrap_or_else(|err| format!("{{\"error\": {:?}}}", err.to_string()))
}
