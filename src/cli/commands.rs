//! Command dispatch
//!
//! Each handler returns the process exit code on success; errors are mapped by
//! `CliError::exit_code` in `main`.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, CalculatorService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{decode_decimal, encode, Numeral};
use crate::exitcode;

pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `numerus --help`".into(),
        ));
    };
    match command {
        Commands::Completion { shell } => _completion(*shell),
        command => {
            let settings = load_settings(cli)?;
            dispatch(cli, command, &settings)
        }
    }
}

fn dispatch(cli: &Cli, command: &Commands, settings: &Settings) -> CliResult<i32> {
    match command {
        Commands::Encode { number } => _encode(*number),
        Commands::Decode { numeral } => _decode(numeral),
        Commands::Validate { numerals } => _validate(numerals),
        Commands::Eval { expression } => _eval(settings, &expression.join(" ")),
        Commands::Config { command } => match command {
            ConfigCommands::Show => _config_show(settings),
            ConfigCommands::Path => _config_path(cli.config.as_deref()),
        },
        Commands::Completion { shell } => _completion(*shell),
    }
}

/// Load layered settings and apply the output preferences.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    if !settings.output.color {
        output::disable_colors();
    }
    Ok(settings)
}

#[instrument]
fn _encode(number: u32) -> CliResult<i32> {
    let numeral = encode(number)?;
    output::info(&numeral);
    Ok(exitcode::OK)
}

#[instrument]
fn _decode(numeral: &str) -> CliResult<i32> {
    let value = decode_decimal(numeral)?;
    output::info(&value);
    Ok(exitcode::OK)
}

#[instrument]
fn _validate(numerals: &[String]) -> CliResult<i32> {
    let mut invalid = 0;
    for text in numerals {
        match Numeral::parse(text) {
            Ok(numeral) => output::success(&format!("{} = {}", numeral, numeral.value())),
            Err(e) => {
                invalid += 1;
                output::failure(&format!("{}: {}", text, e));
            }
        }
    }
    debug!("validate: {} of {} invalid", invalid, numerals.len());
    Ok(if invalid == 0 {
        exitcode::OK
    } else {
        exitcode::DATAERR
    })
}

#[instrument(skip(settings))]
fn _eval(settings: &Settings, expression: &str) -> CliResult<i32> {
    let calculator = CalculatorService::new(settings.calculator.min_terms);
    match calculator.evaluate(expression) {
        Ok(evaluation) => {
            output::result(&format!(
                "{} = {} ({})",
                expression, evaluation.numeral, evaluation.sum
            ));
            Ok(exitcode::OK)
        }
        Err(ApplicationError::InvalidTerms(terms)) => {
            for t in &terms {
                output::failure(&format!("{} is not valid: {}", t.term, t.reason));
            }
            Ok(exitcode::DATAERR)
        }
        Err(e) => Err(e.into()),
    }
}

fn _config_show(settings: &Settings) -> CliResult<i32> {
    output::info(&settings.to_toml()?);
    Ok(exitcode::OK)
}

fn _config_path(explicit: Option<&Path>) -> CliResult<i32> {
    output::header("Config files (lowest to highest precedence)");
    match global_config_path() {
        Some(path) => {
            let state = if path.exists() { "" } else { " (missing)" };
            output::detail(&format!("global: {}{}", path.display(), state));
        }
        None => output::detail(&"global: <no config directory>"),
    }
    if let Some(path) = explicit {
        output::detail(&format!("explicit: {}", path.display()));
    }
    output::detail(&"environment: NUMERUS_*");
    Ok(exitcode::OK)
}

fn _completion(shell: Shell) -> CliResult<i32> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(exitcode::OK)
}
