//! Stream-owning front-ends over the pure formatter.
//!
//! [`Logger`] owns two writable sinks (stdout-like and stderr-like), a
//! color flag per sink, and the [`InspectOptions`] used for every line it
//! writes. [`Console`] layers the stateful conveniences on top: labelled
//! timers, labelled counters, assertions, and stack traces. The inspector
//! itself stays pure; everything in this module is plumbing around
//! [`format`](crate::format).
//!
//! ## Examples
//!
//! ```rust
//! use console_inspect::{value, Console};
//!
//! let mut console = Console::stdio();
//! console.log(&[value!({ "ready": true })]).unwrap();
//! console.time("startup").unwrap();
//! // ... work ...
//! console.time_end("startup").unwrap();
//! ```

use crate::{format, Error, InspectOptions, Result, Value};
use std::backtrace::Backtrace;
use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Instant;

/// Formats values and writes them as lines to a pair of sinks.
///
/// `debug`, `info`, and `log` go to the out sink; `warn` and `error` go
/// to the err sink. Each sink carries its own color flag, so a piped
/// stdout can stay plain while stderr stays colorized (or vice versa).
pub struct Logger {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    out_colors: bool,
    err_colors: bool,
    options: InspectOptions,
}

impl Logger {
    /// A logger over the process stdout/stderr, with colors enabled per
    /// stream when the stream supports them.
    #[must_use]
    pub fn stdio() -> Self {
        let out_colors = console::Term::stdout().features().colors_supported();
        let err_colors = console::Term::stderr().features().colors_supported();
        Logger {
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
            out_colors,
            err_colors,
            options: InspectOptions::new(),
        }
    }

    /// A logger over arbitrary sinks, with colors disabled. Intended for
    /// tests and embedding.
    #[must_use]
    pub fn with_streams(out: impl Write + 'static, err: impl Write + 'static) -> Self {
        Logger {
            out: Box::new(out),
            err: Box::new(err),
            out_colors: false,
            err_colors: false,
            options: InspectOptions::new(),
        }
    }

    /// Replaces the formatting options used for every written line. The
    /// per-sink color flags override the options' color field.
    #[must_use]
    pub fn with_options(mut self, options: InspectOptions) -> Self {
        self.options = options;
        self
    }

    fn write_line(&mut self, to_err: bool, values: &[Value]) -> Result<()> {
        let colors = if to_err {
            self.err_colors
        } else {
            self.out_colors
        };
        let line = format(values, self.options.with_colors(colors))?;
        let sink = if to_err {
            &mut self.err
        } else {
            &mut self.out
        };
        sink.write_all(line.as_bytes()).map_err(Error::io)?;
        sink.flush().map_err(Error::io)?;
        Ok(())
    }

    /// Writes a formatted line to the out sink.
    pub fn debug(&mut self, values: &[Value]) -> Result<()> {
        self.write_line(false, values)
    }

    /// Writes a formatted line to the out sink.
    pub fn info(&mut self, values: &[Value]) -> Result<()> {
        self.write_line(false, values)
    }

    /// Writes a formatted line to the out sink.
    pub fn log(&mut self, values: &[Value]) -> Result<()> {
        self.write_line(false, values)
    }

    /// Writes a formatted line to the err sink.
    pub fn warn(&mut self, values: &[Value]) -> Result<()> {
        self.write_line(true, values)
    }

    /// Writes a formatted line to the err sink.
    pub fn error(&mut self, values: &[Value]) -> Result<()> {
        self.write_line(true, values)
    }

    /// Formats values without writing them anywhere. Colors are off; the
    /// result is the same newline-terminated line `log` would emit to a
    /// non-terminal sink.
    pub fn format(&self, values: &[Value]) -> Result<String> {
        format(values, self.options.with_colors(false))
    }

    /// Writes the ANSI clear-screen sequence to the out sink.
    pub fn clear(&mut self) -> Result<()> {
        self.out
            .write_all(b"\x1b[2J\x1b[1;1H")
            .map_err(Error::io)?;
        self.out.flush().map_err(Error::io)?;
        Ok(())
    }
}

/// The console facade: a [`Logger`] plus labelled timers and counters,
/// assertions, and stack traces.
///
/// Callers wanting the conventional unlabelled behavior pass `"default"`
/// as the label.
pub struct Console {
    logger: Logger,
    timers: HashMap<String, Instant>,
    counters: HashMap<String, u64>,
}

impl Console {
    /// Wraps an existing logger.
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Console {
            logger,
            timers: HashMap::new(),
            counters: HashMap::new(),
        }
    }

    /// A console over the process stdout/stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(Logger::stdio())
    }

    /// Writes a formatted line to the out sink.
    pub fn debug(&mut self, values: &[Value]) -> Result<()> {
        self.logger.debug(values)
    }

    /// Writes a formatted line to the out sink.
    pub fn info(&mut self, values: &[Value]) -> Result<()> {
        self.logger.info(values)
    }

    /// Writes a formatted line to the out sink.
    pub fn log(&mut self, values: &[Value]) -> Result<()> {
        self.logger.log(values)
    }

    /// Writes a formatted line to the err sink.
    pub fn warn(&mut self, values: &[Value]) -> Result<()> {
        self.logger.warn(values)
    }

    /// Writes a formatted line to the err sink.
    pub fn error(&mut self, values: &[Value]) -> Result<()> {
        self.logger.error(values)
    }

    /// Writes the ANSI clear-screen sequence to the out sink.
    pub fn clear(&mut self) -> Result<()> {
        self.logger.clear()
    }

    /// Starts a monotonic timer under `label`. Starting a label twice
    /// warns instead of restarting the timer.
    pub fn time(&mut self, label: &str) -> Result<()> {
        if self.timers.contains_key(label) {
            return self.logger.warn(&[Value::from(format!(
                "Warning: Label '{}' already exists for console.time()",
                label
            ))]);
        }
        self.timers.insert(label.to_string(), Instant::now());
        Ok(())
    }

    /// Logs the elapsed time of a running timer, leaving it running.
    /// Extra values are appended after the timing text.
    pub fn time_log(&mut self, label: &str, values: &[Value]) -> Result<()> {
        let Some(started) = self.timers.get(label) else {
            return self.logger.warn(&[Value::from(format!(
                "Warning: No such label '{}' for console.timeEnd()",
                label
            ))]);
        };
        let ms = started.elapsed().as_secs_f64() * 1e3;
        let text = if ms > 1000.0 {
            format!("{}: {:.3}s", label, ms / 1000.0)
        } else {
            format!("{}: {:.3}ms", label, ms)
        };
        let mut line = Vec::with_capacity(values.len() + 1);
        line.push(Value::from(text));
        line.extend(values.iter().cloned());
        self.logger.log(&line)
    }

    /// Logs the elapsed time of a running timer and removes it.
    pub fn time_end(&mut self, label: &str) -> Result<()> {
        self.time_log(label, &[])?;
        self.timers.remove(label);
        Ok(())
    }

    /// Logs `label: n` for the per-label counter, starting at 1.
    pub fn count(&mut self, label: &str) -> Result<()> {
        let count = self.counters.get(label).copied().unwrap_or(1);
        self.logger
            .log(&[Value::from(format!("{}: {}", label, count))])?;
        self.counters.insert(label.to_string(), count + 1);
        Ok(())
    }

    /// Resets the per-label counter.
    pub fn count_reset(&mut self, label: &str) {
        self.counters.remove(label);
    }

    /// No-op when `condition` holds; otherwise writes the values through
    /// `error`, prefixed with `Assertion failed`.
    pub fn assert(&mut self, condition: bool, values: &[Value]) -> Result<()> {
        if condition {
            return Ok(());
        }
        let mut line: Vec<Value> = values.to_vec();
        match line.first_mut() {
            None => line.push(Value::from("Assertion failed")),
            Some(Value::String(first)) => {
                *first = format!("Assertion failed: {}", first);
            }
            Some(_) => line.insert(0, Value::from("Assertion failed")),
        }
        self.logger.error(&line)
    }

    /// Formats the values into a `Trace: <message>` headline (bare
    /// `Trace` when empty), appends a captured backtrace, and writes the
    /// result through `error`.
    pub fn trace(&mut self, values: &[Value]) -> Result<()> {
        let message = self.logger.format(values)?;
        let message = message.trim_end_matches('\n');
        let headline = if message.is_empty() {
            "Trace".to_string()
        } else {
            format!("Trace: {}", message)
        };
        let backtrace = Backtrace::force_capture();
        self.logger
            .error(&[Value::from(format!("{}\n{}", headline, backtrace))])
    }
}
