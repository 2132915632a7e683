//! Terminal front end.
//!
//! Interactive by default: one command per line (`rock`, `paper`,
//! `scissors`, `reset`, `quit`). `--play` runs a fixed list of shapes instead.
//! Shape names typed here are upper-cased before they reach the engine,
//! which only accepts the exact identifiers.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use rust_rps::{EngineConfig, GameSession, OpponentSource};

#[derive(Debug, Parser)]
#[command(name = "rps", version)]
#[command(about = "Play rock-paper-scissors against a random CPU")]
struct Args {
    /// Seed for the CPU (random from the OS if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Shapes to play in order, then exit
    #[arg(long, num_args = 1..)]
    play: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = EngineConfig { seed: args.seed };
    let mut session = match GameSession::from_config(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = io::stdout().lock();
    let result = if args.play.is_empty() {
        run_interactive(&mut session, io::stdin().lock(), &mut out).map(|()| true)
    } else {
        run_batch(&mut session, &args.play, &mut out)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Shape names as the engine expects them.
fn normalize(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

/// Play every shape in order. Returns `false` as soon as one is rejected.
fn run_batch<O: OpponentSource>(
    session: &mut GameSession<O>,
    shapes: &[String],
    out: &mut impl Write,
) -> io::Result<bool> {
    for name in shapes {
        match session.on_shape_selected(&normalize(name)) {
            Ok(outcome) => writeln!(out, "{outcome}")?,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                return Ok(false);
            }
        }
    }
    writeln!(out, "{}", session.tally())?;
    Ok(true)
}

fn run_interactive<O: OpponentSource>(
    session: &mut GameSession<O>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "Pick ROCK, PAPER or SCISSORS (or `reset`, `quit`).")?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        if command.is_empty() {
            prompt(out)?;
            continue;
        }
        if command.eq_ignore_ascii_case("quit") || command.eq_ignore_ascii_case("exit") {
            break;
        }

        if command.eq_ignore_ascii_case("reset") {
            session.on_reset_requested();
            writeln!(out, "{}", session.message())?;
        } else {
            match session.on_shape_selected(&normalize(command)) {
                Ok(outcome) => writeln!(out, "{outcome}")?,
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }

        writeln!(out, "{}", session.tally())?;
        prompt(out)?;
    }

    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
