//! Logging Infrastructure
//!
//! Console output plus, when a log directory is given, daily rotating files:
//! `app/` for everything and `security/` for the `security` target.

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset
pub fn default_directives(level: &str) -> String {
    format!("bakery_server={level},shared={level},tower_http={level}")
}

/// Initialize the logger
///
/// # Arguments
/// * `level` - Log level for the crate targets (e.g. "info", "debug")
/// * `json_format` - JSON console output (production)
/// * `log_dir` - Optional directory for daily rotating files
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let json_console = json_format.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
    });
    let pretty_console = (!json_format).then(|| {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
    });

    let (app_layer, security_layer) = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            let app_log_dir = log_dir.join("app");
            let security_log_dir = log_dir.join("security");
            fs::create_dir_all(&app_log_dir)?;
            fs::create_dir_all(&security_log_dir)?;

            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "bakery-server");
            let app_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    meta.target() != "security"
                }));

            let security_log =
                RollingFileAppender::new(Rotation::DAILY, security_log_dir, "security");
            let security_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(security_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    meta.target() == "security"
                }));

            (Some(app_layer), Some(security_layer))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_console)
        .with(pretty_console)
        .with(app_layer)
        .with(security_layer)
        .try_init()?;

    Ok(())
}
