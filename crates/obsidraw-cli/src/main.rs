//! Obsidraw CLI entry point.

use std::{process, str::FromStr};

use log::{LevelFilter, debug, error, info};

use obsidraw_cli::{error_adapter::to_reportables, exit_code, parse_args};

fn main() {
    miette::set_panic_hook();

    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            // Help and version go to stdout, usage errors to stderr.
            let _ = err.print();
            process::exit(exit_code(&err));
        }
    };

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

    info!(log_level:?; "Starting Obsidraw");
    debug!(args:?; "Parsed arguments");

    match obsidraw_cli::run(&args) {
        Ok(written) => info!(path:? = written; "Conversion finished"),
        Err(err) => {
            let reporter = miette::GraphicalReportHandler::new();
            for reportable in to_reportables(&err) {
                let mut writer = String::new();
                if reporter.render_report(&mut writer, &reportable).is_err() {
                    writer = reportable.to_string();
                }
                error!("{writer}");
            }
            process::exit(1);
        }
    }
}
