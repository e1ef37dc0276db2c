use anyhow::{Context, Result};
use chrono::Local;
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    prelude::*,
    registry::LookupSpan,
    EnvFilter, Layer,
};

/// Level used when `RUST_LOG` is not set
const DEFAULT_DIRECTIVE: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Routes the crate's internal diagnostics to an hourly rolling file in `dir`.
///
/// Console output of [`Logger`](crate::Logger) is not affected; this only
/// captures `tracing` events such as mode changes and failed writes.
/// The returned guard MUST be kept alive by the caller.
pub fn setup_diagnostics(dir: impl AsRef<Path>) -> Result<WorkerGuard> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create diagnostics dir {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::hourly(dir, "pyx-log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(DiagnosticFormatter);

    tracing_subscriber::registry()
        .with(file_layer.with_filter(env_filter()))
        .try_init()
        .context("Failed to set global subscriber")?;

    Ok(guard)
}

/// Same as [`setup_diagnostics`] but writes to a single file at `log_path`.
pub fn setup_diagnostics_with_file(log_path: impl AsRef<Path>) -> Result<WorkerGuard> {
    let log_path = log_path.as_ref();
    let file = File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(BufWriter::new(file));

    let subscriber = tracing_subscriber::registry().with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .event_format(DiagnosticFormatter)
            .with_filter(env_filter()),
    );

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global subscriber")?;

    Ok(guard)
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push_str(&format!(" {}={:?}", field.name(), value));
        }
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push_str(&format!(" {}={}", field.name(), value));
        }
    }
}

/// `2024-01-01 12:00:00 [WARN] pyx_log: message key=value`
pub struct DiagnosticFormatter;

impl<S, N> FormatEvent<S, N> for DiagnosticFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let meta = event.metadata();

        write!(writer, "{} [{}] {}: ", timestamp, meta.level(), meta.target())?;

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        writeln!(writer, "{}{}", visitor.message, visitor.fields)
    }
}
