// snow: parse source files or standard input and report diagnostics

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as CliParser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use eyre::WrapErr;
use log::{debug, LevelFilter};

use snow::parser::lexer::Lexer;
use snow::parser::parse::{ParseError, Parser};

#[derive(Debug, CliParser)]
#[command(name = "snow", version, about = "Parse snow source and report diagnostics")]
struct App {
    /// Source file; standard input is parsed line by line when omitted
    file: Option<PathBuf>,

    /// Print the token stream instead of the parsed program
    #[arg(long)]
    tokens: bool,

    /// Log filter, e.g. `debug` or `snow::parser=trace`
    #[arg(long = "log-level", env = "RUST_LOG")]
    log: Option<String>,
}

fn main() -> ExitCode {
    let app = App::parse();
    logger(app.log.as_deref()).init();
    debug!("starting snow with args {app:?}");

    match run(&app) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Logger honouring `env_logger` filter directives, `warn` when none are given
fn logger(filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }
    builder
}

/// Returns whether every parse was free of diagnostics.
fn run(app: &App) -> eyre::Result<bool> {
    if let Some(path) = &app.file {
        let source = fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read '{}'", path.display()))?;
        return Ok(process(&source, app.tokens));
    }

    let interactive = io::stdin().is_tty();
    let mut clean = true;
    let mut stdout = io::stdout();

    let mut lines = io::stdin().lock().lines();
    loop {
        if interactive {
            write!(stdout, ">> ")?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        clean &= process(&line.wrap_err("could not read standard input")?, app.tokens);
    }

    Ok(clean)
}

fn process(source: &str, dump_tokens: bool) -> bool {
    if dump_tokens {
        for token in Lexer::new(source).tokenize() {
            println!("{:<10} {:?} @ {}", token.kind, token.literal, token.location);
        }
        return true;
    }

    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();

    if !program.statements.is_empty() {
        println!("{program}");
    }
    report(parser.errors());

    parser.errors().is_empty()
}

fn report(errors: &[ParseError]) {
    let colored = io::stderr().is_tty();

    for err in errors {
        let location = err.location.to_string();
        if colored {
            eprintln!("{}: {}", location.bold(), err.to_string().red());
        } else {
            eprintln!("{location}: {err}");
        }
    }
}
