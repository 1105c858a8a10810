use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use exprcalc::{
    scientific::DEFAULT_PRECISION,
    session::{Reply, Session},
};
use tracing::{error, info};

/// exprcalc evaluates arithmetic expressions with `+ - * /`, parentheses and
/// the functions sin, cos, tan, asin, acos, atan, log, log10, ln and exp.
///
/// Without an expression, lines are read from standard input. Besides
/// expressions, a line may be `ms [VALUE]` (store VALUE or the last result),
/// `mr` (recall) or `mc` (clear).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the expression argument as a file and evaluate each of its lines.
    #[arg(short, long, requires = "expression")]
    file: bool,

    /// Print replies as JSON bodies instead of plain values.
    #[arg(short, long)]
    json: bool,

    /// Fractional digits of the scientific mantissa in JSON replies.
    #[arg(short, long, env = "EXPRCALC_PRECISION", default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Raise log verbosity on stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut session = Session::new(args.precision);
    info!(precision = args.precision, json = args.json, "starting session");

    let succeeded = match &args.expression {
        Some(path) if args.file => {
            let Ok(script) = fs::read_to_string(path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            run_lines(&mut session, script.lines(), args.json)
        },
        Some(expression) => emit(&session.execute(expression), args.json),
        None => {
            let lines = io::stdin().lock().lines().map_while(Result::ok);
            run_lines(&mut session, lines, args.json)
        },
    };

    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Executes every non-blank line, continuing past failures.
///
/// Returns `false` if any line failed.
fn run_lines<L>(session: &mut Session, lines: impl Iterator<Item = L>, json: bool) -> bool
    where L: AsRef<str>
{
    let mut all_ok = true;
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= emit(&session.execute(line), json);
    }
    all_ok
}

/// Prints one reply and returns whether it was a success.
fn emit(reply: &Reply, json: bool) -> bool {
    if json {
        match reply.to_json() {
            Ok(body) => println!("{body}"),
            Err(e) => {
                error!(error = %e, "failed to serialize reply");
                return false;
            },
        }
    } else if reply.is_error() {
        eprintln!("{reply}");
    } else {
        println!("{reply}");
    }
    !reply.is_error()
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{
        filter::{LevelFilter, Targets},
        fmt::Layer,
        prelude::*,
    };

    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry()
        .with(Layer::new()
            .with_writer(io::stderr)
            .with_filter(Targets::new()
                .with_default(LevelFilter::WARN)
                .with_target("exprcalc", level)
            )
        )
        .init();
}
