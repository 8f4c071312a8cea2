use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use sysgram::SysgramError;
use sysgram_cli::{Args, ErrorAdapter};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting sysgram");
    debug!(args:?; "Parsed arguments");

    let summary = match sysgram_cli::run(&args) {
        Ok(summary) => summary,
        Err(err) => {
            report(&err);
            process::exit(1);
        }
    };

    for failure in &summary.failures {
        error!(input = failure.input.display().to_string(); "Document failed to render");
        report(&failure.error);
    }

    if !summary.is_success() {
        process::exit(1);
    }

    info!("Completed successfully");
}

/// Render an error through miette's graphical handler.
fn report(err: &SysgramError) {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    reporter
        .render_report(&mut writer, &ErrorAdapter(err))
        .expect("Writing to String buffer is infallible");

    error!("Failed\n{writer}");
}
