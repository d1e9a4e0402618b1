use std::{io, process};

use postcadence::{
    application::{
        commands::{execute_dates, execute_plan},
        error::{AppError, error_chain},
    },
    config,
    infra::telemetry,
};
use time::OffsetDateTime;
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(error.exit_code());
    }
}

fn report_application_error(error: &AppError) {
    let chain = error_chain(error).join(": ");

    if dispatcher::has_been_set() {
        error!(error = %chain, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %chain, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging)?;

    let today = OffsetDateTime::now_utc().date();

    match &cli_args.command {
        config::Command::Plan(args) => execute_plan(&settings, args, today),
        config::Command::Dates(args) => execute_dates(&settings, args, today),
    }
}
