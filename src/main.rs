//! TCH GUI Client - Main Entry Point
//!
//! Native admin tool for TeddyCloud custom tag management

use tch_gui::app::application::run_app;
use tch_gui::helpers::{get_or_create_data_dir, is_development};

fn main() {
    // Initialize tracing for logging. Logs go to a daily-rolling file in the
    // data dir when it is available, otherwise to stderr.
    let default_level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let builder = tracing_subscriber::fmt().with_env_filter(
        tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
    );

    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "tch-gui.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder.with_writer(writer).with_ansi(false).init();
            // The guard flushes buffered log lines; it must live as long as the app.
            Box::leak(Box::new(guard));
        }
        Err(_) => builder.init(),
    }

    tracing::info!("Starting TCH GUI Client...");

    // Run the GPUI application
    run_app();
}
