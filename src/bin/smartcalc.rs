use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use tracing::Level;

use smartcalc::{
    CalcError, Repl, ReplConfig, Response, Session,
    frontend::render,
    repl::run_lines,
};

#[derive(Parser)]
#[command(author, version, about = "Arbitrary-precision integer calculator")]
struct Args {
    /// Prompt shown before each interactive line
    #[arg(long, default_value = "")]
    prompt: String,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session
    Repl,
    /// Evaluate a single line and print the result
    Eval {
        #[arg(allow_hyphen_values = true)]
        line: String,
    },
    /// Process every line of a file as an interactive session would
    Run { script: PathBuf },
}

fn main() -> Result<ExitCode, CalcError> {
    let args = Args::parse();
    init_logging(args.verbose);
    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let mut repl = Repl::new(ReplConfig {
                prompt: args.prompt,
            });
            repl.run()?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Eval { line } => {
            let response = Session::new().handle_line(&line);
            if let Some(text) = render(&response) {
                println!("{text}");
            }
            Ok(exit_code(matches!(response, Response::Error(_))))
        }
        Command::Run { script } => {
            let reader = BufReader::new(File::open(&script)?);
            let failures = run_lines(reader, io::stdout().lock())?;
            Ok(exit_code(failures > 0))
        }
    }
}

fn exit_code(failed: bool) -> ExitCode {
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
