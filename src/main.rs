use std::process;

use richdoc::{
    application::{
        error::AppError,
        render::{
            RenderOptions, RenderService, build_outline, configure_render_service, parse_document,
            render_service,
        },
    },
    config::{self, HeadingsArgs, OutputFormat, RenderArgs},
    infra::{error::InfraError, io, telemetry},
};
use serde::Serialize;
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(i32::from(error.exit_code()));
    }
}

fn report_application_error(error: &AppError) {
    let report = error.report();

    if dispatcher::has_been_set() {
        error!(error = %report.summary(), exit_code = report.exit_code, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %report.summary(), exit_code = report.exit_code, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging)?;
    configure_render_service(RenderOptions::from(&settings.render))
        .map_err(|err| InfraError::configuration(err.to_string()))?;

    match cli_args.command {
        config::Command::Render(args) => run_render(args),
        config::Command::Headings(args) => run_headings(args),
    }
}

fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let source = io::read_source(args.input.as_deref())?;
    let tree = parse_document(&source)?;

    let document = render_service().render(tree.as_ref());

    info!(
        target = "richdoc::render",
        headings = document.headings.len(),
        words = document.metrics.word_count,
        reading_time_minutes = document.metrics.reading_time_minutes,
        "document rendered"
    );

    let output = match args.format {
        OutputFormat::Html => document.html,
        OutputFormat::Json => to_json(&document)?,
    };

    io::write_output(args.output.as_deref(), &output)?;
    Ok(())
}

fn run_headings(args: HeadingsArgs) -> Result<(), AppError> {
    let source = io::read_source(args.input.as_deref())?;
    let tree = parse_document(&source)?;

    let headings = render_service().headings(tree.as_ref());
    info!(
        target = "richdoc::headings",
        count = headings.len(),
        "headings extracted"
    );

    let output = if args.outline {
        to_json(&build_outline(&headings))?
    } else {
        to_json(&headings)?
    };

    io::write_output(None, &output)?;
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| AppError::unexpected(format!("failed to serialize output: {err}")))
}
