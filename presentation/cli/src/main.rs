//! Terminal front end for the pull date calculator.

mod interactive;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use business::application::withdrawal::calculate::CalculateWithdrawalUseCaseImpl;
use business::domain::shared::locale::Locale;
use business::domain::withdrawal::rule::WithdrawalRule;
use business::domain::withdrawal::use_cases::calculate::{
    CalculateWithdrawalParams, CalculateWithdrawalUseCase,
};
use clock::{CalendarTimezone, build_clock};
use logger::TracingLogger;

#[derive(Parser)]
#[command(name = "pull-date")]
#[command(version)]
#[command(
    about = "Work out when a product must be pulled from sale (20% shelf-life rule)",
    long_about = None
)]
struct Cli {
    /// Language for labels and messages (en, vi)
    #[arg(long, global = true, default_value = "en", env = "PULL_DATE_LOCALE")]
    locale: Locale,
    /// Calendar "today" is read from (local, utc)
    #[arg(long, global = true, default_value = "local", env = "CALENDAR_TIMEZONE")]
    timezone: CalendarTimezone,
    /// Pin "today" to this date (YYYY-MM-DD)
    #[arg(long, global = true, env = "CALCULATION_DATE")]
    today: Option<String>,
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the pull date for one product
    Calculate {
        /// Manufacturing date (YYYY-MM-DD)
        #[arg(long, short = 'm', default_value = "")]
        manufacture_date: String,
        /// Expiry date (YYYY-MM-DD)
        #[arg(long, short = 'e', default_value = "")]
        expiry_date: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fill in the form interactively
    Interactive,
    /// Explain the withdrawal rule
    Rule,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit status when the dates are rejected by validation.
const EXIT_VALIDATION_FAILED: u8 = 2;

/// Runs one calculation and writes the outcome; returns the process exit status.
fn cmd_calculate(
    use_case: &dyn CalculateWithdrawalUseCase,
    locale: Locale,
    params: CalculateWithdrawalParams,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<u8> {
    match use_case.execute(params) {
        Ok(result) if json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            Ok(0)
        }
        Ok(result) => {
            writeln!(out, "{}", render::result(&result, locale))?;
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "{}", render::error(&e, locale))?;
            Ok(EXIT_VALIDATION_FAILED)
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let clock = build_clock(cli.today.as_deref(), cli.timezone)
        .context("--today must be formatted as YYYY-MM-DD")?;

    match cli.command {
        Commands::Calculate {
            manufacture_date,
            expiry_date,
            json,
        } => {
            let use_case = CalculateWithdrawalUseCaseImpl {
                clock,
                logger: Arc::new(TracingLogger),
            };
            let status = cmd_calculate(
                &use_case,
                cli.locale,
                CalculateWithdrawalParams {
                    manufacture_date,
                    expiry_date,
                },
                json,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            Ok(ExitCode::from(status))
        }
        Commands::Interactive => {
            interactive::run(clock, cli.locale)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Rule => {
            println!(
                "{} {}",
                "▸".cyan(),
                render::rule(&WithdrawalRule::standard(), cli.locale)
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
