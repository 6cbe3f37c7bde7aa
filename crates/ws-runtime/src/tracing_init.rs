//! Subscriber setup for the `wsim` binary.

use std::fmt::{self as stdfmt, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::{LookupSpan, Registry};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use ws_config::{LogFormat, LoggingConfig};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// One line per event with the `domain` field lifted into a prefix:
///
/// ```text
/// 2026-02-21T01:17:14Z  INFO [poll] published update topic="occupancy" subscribers=2
/// ```
///
/// Events from dependencies carry no domain and are printed without one.
/// Span context is not rendered.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomainFormat;

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => "\x1b[31m",
        Level::WARN => "\x1b[33m",
        Level::INFO => "\x1b[32m",
        Level::DEBUG => "\x1b[34m",
        Level::TRACE => "\x1b[35m",
    }
}

impl<S, N> FormatEvent<S, N> for DomainFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> fmt::FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: fmt::format::Writer<'_>,
        event: &Event<'_>,
    ) -> stdfmt::Result {
        let mut line = EventLine::default();
        event.record(&mut line);

        if SystemTime.format_time(&mut writer).is_err() {
            writer.write_str("<unknown time>")?;
        }
        let level = *event.metadata().level();
        if writer.has_ansi_escapes() {
            write!(writer, " {}{level:>5}\x1b[0m ", level_color(level))?;
        } else {
            write!(writer, " {level:>5} ")?;
        }
        if let Some(domain) = &line.domain {
            write!(writer, "[{domain}] ")?;
        }
        writer.write_str(&line.message)?;
        if !line.fields.is_empty() {
            write!(writer, " {}", line.fields)?;
        }
        writeln!(writer)
    }
}

/// An event split into its domain, its message and the remaining fields.
#[derive(Default)]
struct EventLine {
    domain: Option<String>,
    message: String,
    fields: String,
}

impl EventLine {
    fn push_field(&mut self, name: &str, value: impl stdfmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        write!(&mut self.fields, "{name}={value}").ok();
    }
}

impl Visit for EventLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "domain" => self.domain = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            name => self.push_field(name, format_args!("{value:?}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn stdfmt::Debug) {
        match field.name() {
            "domain" => self.domain = Some(format!("{value:?}").trim_matches('"').to_string()),
            "message" => self.message = format!("{value:?}"),
            name => self.push_field(name, format_args!("{value:?}")),
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push_field(field.name(), value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push_field(field.name(), value);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push_field(field.name(), value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push_field(field.name(), value);
    }
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if std::env::var("RUST_LOG").is_ok() {
        return Ok(EnvFilter::from_default_env());
    }
    let directives = config.filter_directives();
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow::anyhow!("invalid log filter '{directives}': {e}"))
}

fn resolve_log_file(file: &Path, base_dir: &Path) -> PathBuf {
    if file.is_relative() {
        base_dir.join(file)
    } else {
        file.to_path_buf()
    }
}

/// A filtered output layer: JSON objects, or [`DomainFormat`] lines.
fn output_layer<W>(config: &LoggingConfig, writer: W, ansi: bool) -> Result<BoxedLayer>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = build_filter(config)?;
    let layer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
        LogFormat::Plain => fmt::layer()
            .event_format(DomainFormat)
            .with_ansi(ansi)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
    };
    Ok(layer)
}

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG`, when set, replaces the configured level and module overrides
/// for every output. With a `file` configured, events are also written
/// through a non-blocking appender; the returned guard flushes it on drop,
/// so keep it alive until the process exits.
pub fn init_tracing(config: &LoggingConfig, base_dir: &Path) -> Result<Option<WorkerGuard>> {
    let mut layers = vec![output_layer(config, std::io::stderr, true)?];

    let guard = match &config.file {
        Some(file) => {
            let resolved = resolve_log_file(file, base_dir);
            let dir = resolved
                .parent()
                .ok_or_else(|| anyhow::anyhow!("log file path has no parent directory"))?;
            std::fs::create_dir_all(dir)?;
            let file_name = resolved
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("log file path has no file name"))?
                .to_os_string();
            let (non_blocking, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            layers.push(output_layer(config, non_blocking, false)?);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(emit: impl FnOnce()) -> String {
        let out = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .event_format(DomainFormat)
            .with_writer(out.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, emit);
        let bytes = out.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn domain_becomes_prefix() {
        let line = capture(|| {
            tracing::info!(
                domain = "poll",
                topic = "occupancy",
                subscribers = 2_u64,
                "published update"
            );
        });
        assert!(
            line.contains(" INFO [poll] published update topic=\"occupancy\" subscribers=2\n"),
            "{line}"
        );
    }

    #[test]
    fn event_without_domain_has_no_prefix() {
        let line = capture(|| tracing::warn!(retries = 3_i64, "plain event"));
        assert!(line.contains(" WARN plain event retries=3"), "{line}");
        assert!(!line.contains('['), "{line}");
    }

    #[test]
    fn span_context_is_not_rendered() {
        let line = capture(|| {
            let span = tracing::info_span!("gateway.init", seed = 4_u64);
            let _entered = span.enter();
            tracing::info!(domain = "sys", "gateway ready");
        });
        assert!(!line.contains("gateway.init"), "{line}");
        assert!(line.contains("[sys] gateway ready"), "{line}");
    }

    #[test]
    fn relative_log_file_resolves_against_base() {
        assert_eq!(
            resolve_log_file(Path::new("logs/wsim.log"), Path::new("/srv/wsim")),
            PathBuf::from("/srv/wsim/logs/wsim.log")
        );
        assert_eq!(
            resolve_log_file(Path::new("/var/log/wsim.log"), Path::new("/srv/wsim")),
            PathBuf::from("/var/log/wsim.log")
        );
    }

    #[test]
    fn bad_level_is_rejected() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let cfg = LoggingConfig {
            level: "info,ws_runtime=loud".into(),
            ..LoggingConfig::default()
        };
        assert!(build_filter(&cfg).is_err());
    }
}
