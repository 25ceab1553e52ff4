use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use nuo::cli::Args;
use nuo::error::UpdateError;
use nuo::logging;
use nuo::npm::NpmClient;
use nuo::pipeline::{Outcome, Pipeline};
use nuo::session::Session;
use nuo::terminal::DialoguerTerminal;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    match run(&args).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "run finished");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

async fn run(args: &Args) -> Result<Outcome> {
    let npm = NpmClient::from_env();
    let pipeline = Pipeline::new(&npm, args.run_options());
    Ok(pipeline.run(Session::new(DialoguerTerminal::new())).await?)
}

fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<UpdateError>() {
        Some(update_err) if update_err.is_cancelled() => {
            eprintln!("{}", "Update cancelled".yellow());
            ExitCode::from(update_err.exit_code())
        }
        Some(update_err) => {
            eprintln!("{} {update_err}", "Error:".red().bold());
            ExitCode::from(update_err.exit_code())
        }
        None => {
            eprintln!("{} {err:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
