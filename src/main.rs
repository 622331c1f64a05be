use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser;
use loris::{errors::report::render, lexer::lexer::tokenize};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Dumps the token stream of a source file.
#[derive(Parser, Debug)]
#[command(name = "loris-lex", version, about)]
struct Cli {
    /// Source file to tokenize
    path: PathBuf,

    /// Name used for the source in error reports (defaults to the file name)
    #[arg(long)]
    name: Option<String>,

    /// Log lexer activity at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let source = read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;

    let name = cli.name.or_else(|| {
        cli.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    });

    let start = Instant::now();
    match tokenize(source.clone(), name) {
        Ok(tokens) => {
            info!("Tokenized in {:?}", start.elapsed());
            for token in tokens {
                println!("{}: {}", token.line, token);
            }
            Ok(true)
        }
        Err(error) => {
            eprint!("{}", render(&error, &source));
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}
