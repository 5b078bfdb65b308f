//! Unscramble - CLI
//!
//! Reads guesses from standard input until end of input, then reports the
//! final score. Exits with a distinct status for each configuration error and
//! for a game in which nothing scored.

use anyhow::{Context, Result};
use log::debug;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use unscramble::{
    config::Config,
    game::{CandidateSet, Session, run_session},
    output::Printer,
    wordlists::filter_dictionary,
};

/// Exit status when the game ends with a score of zero
const EXIT_NO_VALID_WORDS: u8 = 15;

/// Exit status when the game fails part way through
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };
    debug!("Configuration: {config:?}");

    let result = play(&config);
    if let Err(err) = &result {
        eprintln!("uqunscramble: {err:#}");
    }
    ExitCode::from(exit_status(&result))
}

/// Load the dictionary, run one game over stdin and return the final score
fn play(config: &Config) -> Result<u32> {
    let words = filter_dictionary(&config.dictionary, &config.pool, config.min_length)
        .with_context(|| format!("failed to read dictionary {}", config.dictionary.display()))?;

    let mut printer = Printer::new(io::stdout().lock(), io::stdout().is_terminal());
    printer.start(&config.pool, config.min_length)?;

    let mut session = Session::new(&config.pool, config.min_length, CandidateSet::new(words));
    let score = run_session(&mut session, io::stdin().lock(), |outcome| {
        printer.outcome(outcome)
    })
    .context("failed while reading guesses")?;

    printer.finish(score)?;
    debug!("Final score {score}");
    Ok(score)
}

/// Process exit status for a finished (or failed) game
fn exit_status(result: &Result<u32>) -> u8 {
    match result {
        Ok(0) => EXIT_NO_VALID_WORDS,
        Ok(_) => 0,
        Err(_) => EXIT_FAILURE,
    }
}
