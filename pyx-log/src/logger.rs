//! # Logger
//!
//! A named console logger. Every line ends with the logger's styled
//! `[name]` label, which is rendered once when the logger is built.
//!
//! `header`, `log` and `alert` are muted by [`Logger::be_silent`];
//! `debug` ignores the mode and only prints while the debug variable
//! (`DEBUG_MODE` by default) is present in the environment.

use crate::config::{LoggerConfig, DEFAULT_DEBUG_VAR};
use crate::error::LogError;
use crate::traits::{EnvSource, ProcessEnv};
use crate::utils::style::Palette;
use crate::value::LogValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

const MODE_SILENT: u8 = 0;
const MODE_NORMAL: u8 = 1;

/// Output mode of a [`Logger`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Silent,
    #[default]
    Normal,
}

impl Mode {
    fn as_u8(self) -> u8 {
        match self {
            Mode::Silent => MODE_SILENT,
            Mode::Normal => MODE_NORMAL,
        }
    }

    fn from_u8(raw: u8) -> Self {
        if raw == MODE_SILENT {
            Mode::Silent
        } else {
            Mode::Normal
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Silent => write!(f, "silent"),
            Mode::Normal => write!(f, "normal"),
        }
    }
}

impl FromStr for Mode {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Mode::Normal),
            "silent" => Ok(Mode::Silent),
            _ => Err(LogError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

type Sink = Box<dyn Write + Send>;

pub struct Logger {
    name: String,
    rendered_label: String,
    palette: Palette,
    mode: AtomicU8,
    debug_var: String,
    env: Box<dyn EnvSource>,
    sink: Mutex<Sink>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("mode", &self.mode())
            .field("debug_var", &self.debug_var)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Creates a logger writing to stdout, in normal mode, with the debug
    /// channel bound to `DEBUG_MODE` in the process environment.
    ///
    /// ```
    /// let me = pyx_log::Logger::create("MyLog");
    /// assert_eq!(me.name(), "MyLog");
    /// ```
    pub fn create(name: &str) -> Self {
        Self::builder(name).build()
    }

    pub fn builder(name: &str) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::builder(&config.name)
            .mode(config.mode)
            .debug_var(&config.debug_var)
            .ansi(config.ansi)
            .build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The styled `[name]` suffix appended to every line
    pub fn rendered_label(&self) -> &str {
        &self.rendered_label
    }

    pub fn mode(&self) -> Mode {
        Mode::from_u8(self.mode.load(Ordering::SeqCst))
    }

    pub fn is_silent(&self) -> bool {
        self.mode() == Mode::Silent
    }

    /// Mutes `header`, `log` and `alert` until [`Logger::be_normal`] is called.
    pub fn be_silent(&self) {
        self.set_mode(Mode::Silent);
    }

    /// Restores the default output mode.
    pub fn be_normal(&self) {
        self.set_mode(Mode::Normal);
    }

    fn set_mode(&self, mode: Mode) {
        let previous = self.mode.swap(mode.as_u8(), Ordering::SeqCst);
        if previous != mode.as_u8() {
            debug!(target: "pyx_log", logger = %self.name, "Mode changed to {}", mode);
        }
    }

    /// Whether the debug variable is currently present in the environment
    pub fn debug_enabled(&self) -> bool {
        self.env.is_set(&self.debug_var)
    }

    /// Prints `===> {msg} [name]` with the arrow and message in bold.
    pub fn header(&self, msg: impl fmt::Display) {
        self.run_in_mode(|| {
            let line = format!(
                "{} {}",
                self.palette.header(&msg.to_string()),
                self.rendered_label
            );
            self.emit(&[line]);
        });
    }

    /// Prints one or more values.
    ///
    /// A single value goes on one line followed by the label. Several values
    /// are framed by `[name] =>` and `[name] <=` lines, one value per line.
    /// Text is printed as-is; anything else as compact JSON.
    pub fn log<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<LogValue>,
    {
        self.run_in_mode(|| {
            let values: Vec<LogValue> = values.into_iter().map(Into::into).collect();
            let lines = match values.as_slice() {
                [] => return,
                [single] => vec![format!(
                    "   {} {}",
                    single.render_json(),
                    self.rendered_label
                )],
                many => {
                    let mut lines = Vec::with_capacity(many.len() + 2);
                    lines.push(format!("{} =>", self.rendered_label));
                    lines.extend(many.iter().map(|v| format!("     {}", v.render_json())));
                    lines.push(format!("{} <=", self.rendered_label));
                    lines
                }
            };
            self.emit(&lines);
        });
    }

    /// Prints debug values while the debug variable is set, whatever the mode.
    ///
    /// The first value is the headline; any further values are printed one per
    /// line in inspect style and closed by a `===# DEBUG [name]` line.
    pub fn debug<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<LogValue>,
    {
        if !self.debug_enabled() {
            return;
        }

        let mut values = values.into_iter().map(Into::<LogValue>::into);
        let Some(main) = values.next() else {
            return;
        };

        let mut lines = vec![format!(
            "{} {}",
            self.palette.debug_open(&main.render_inspect()),
            self.rendered_label
        )];
        let extra_start = lines.len();
        lines.extend(values.map(|v| v.render_inspect()));
        if lines.len() > extra_start {
            lines.push(format!(
                "{} {}",
                self.palette.debug_close(),
                self.rendered_label
            ));
        }
        self.emit(&lines);
    }

    /// Prints `A => {msg} !!!! [name]`.
    pub fn alert(&self, msg: impl fmt::Display) {
        self.run_in_mode(|| {
            let line = format!(
                "{} {}",
                self.palette.alert(&msg.to_string()),
                self.rendered_label
            );
            self.emit(&[line]);
        });
    }

    fn run_in_mode<F: FnOnce()>(&self, action: F) {
        if self.mode() == Mode::Normal {
            action();
        }
    }

    fn lock_sink(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Writes each line with its own `write_all`, holding the sink for the
    /// whole block.
    fn emit(&self, lines: &[String]) {
        let mut sink = self.lock_sink();
        let result = lines
            .iter()
            .try_for_each(|line| write_line(&mut *sink, line))
            .and_then(|_| sink.flush());
        if let Err(e) = result {
            warn!(target: "pyx_log", logger = %self.name, "Failed to write log line: {}", e);
        }
    }
}

fn write_line(sink: &mut dyn Write, line: &str) -> io::Result<()> {
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');
    sink.write_all(buf.as_bytes())
}

/// Builder for a [`Logger`] with a custom sink, environment or styling.
pub struct LoggerBuilder {
    name: String,
    mode: Mode,
    debug_var: String,
    ansi: bool,
    env: Option<Box<dyn EnvSource>>,
    sink: Option<Sink>,
}

impl LoggerBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mode: Mode::Normal,
            debug_var: DEFAULT_DEBUG_VAR.to_string(),
            ansi: true,
            env: None,
            sink: None,
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn debug_var(mut self, key: &str) -> Self {
        self.debug_var = key.to_string();
        self
    }

    /// Disables escape sequences when `false`
    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Some(Box::new(env));
        self
    }

    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(writer));
        self
    }

    pub fn build(self) -> Logger {
        let palette = Palette::new(self.ansi);
        let rendered_label = palette.label(&self.name);

        Logger {
            name: self.name,
            rendered_label,
            palette,
            mode: AtomicU8::new(self.mode.as_u8()),
            debug_var: self.debug_var,
            env: self.env.unwrap_or_else(|| Box::new(ProcessEnv)),
            sink: Mutex::new(self.sink.unwrap_or_else(|| Box::new(io::stdout()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("normal".parse::<Mode>().unwrap(), Mode::Normal);
        assert_eq!(" Silent ".parse::<Mode>().unwrap(), Mode::Silent);
        assert!(matches!(
            "loud".parse::<Mode>(),
            Err(LogError::InvalidMode { value }) if value == "loud"
        ));
    }

    #[test]
    fn test_mode_round_trips_through_atomic() {
        for mode in [Mode::Silent, Mode::Normal] {
            assert_eq!(Mode::from_u8(mode.as_u8()), mode);
        }
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn test_logger_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }
}
