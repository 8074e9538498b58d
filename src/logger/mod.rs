// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;
use std::fmt;
use std::fmt::Arguments;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use crate::Level;
use crate::layout::Layout;
use crate::record::Record;
use crate::record::SourceLocation;
use crate::sink::Sink;
use crate::sink::Stdout;
use crate::trap::Trap;

mod builder;
pub use self::builder::LoggerBuilder;
pub use self::builder::builder;

/// A leveled logger that gates messages against a dynamic threshold and
/// writes rendered records to one or more sinks.
///
/// A message is emitted when its level is at or above the threshold; the
/// gate is checked before any formatting work is done. The threshold can be
/// adjusted at any time with [`set_level`](Logger::set_level) and applies to
/// subsequent calls only.
///
/// The emit path (render + write) is serialized by an instance-scoped lock,
/// so concurrent calls never interleave their bytes on a shared sink.
///
/// Logging at [`Level::Panic`] writes the record and then panics with the
/// rendered line. This is a deliberate log-then-abort contract, not a
/// failure: the panic is raised after the write completes.
///
/// # Examples
///
/// ```
/// use logward::Level;
/// use logward::sink::Testing;
///
/// let sink = Testing::default();
/// let logger = logward::Logger::new(Level::Info, sink.clone());
///
/// logger.debug("not emitted");
/// logger.info("service started");
/// logward::error!(logger, "boom {}", 7);
///
/// let lines = sink.lines();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[1].contains("boom 7"));
/// ```
#[derive(Debug)]
pub struct Logger {
    // the threshold, stored as a level discriminant
    threshold: AtomicU8,
    capture_source: bool,
    layout: Box<dyn Layout>,
    trap: Box<dyn Trap>,
    shared: Mutex<SinkTable>,
}

// One stream per level, indexed by the level discriminant. Every slot
// initially shares the constructed sink; fan-out pushes extras per slot.
#[derive(Debug)]
struct SinkTable {
    streams: [Vec<Arc<dyn Sink>>; Level::COUNT],
    closed: bool,
}

impl Logger {
    /// Create a logger bound to a single sink with the given threshold and
    /// the default text layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use logward::Level;
    /// use logward::sink::Stdout;
    ///
    /// let logger = logward::Logger::new(Level::Info, Stdout::default());
    /// ```
    pub fn new(level: Level, sink: impl Into<Box<dyn Sink>>) -> Self {
        builder().level(level).sink(sink).build()
    }

    /// Returns a new builder.
    pub fn builder() -> LoggerBuilder {
        builder()
    }

    pub(crate) fn from_parts(
        level: Level,
        capture_source: bool,
        layout: Box<dyn Layout>,
        trap: Box<dyn Trap>,
        primary: Box<dyn Sink>,
    ) -> Self {
        let primary: Arc<dyn Sink> = Arc::from(primary);
        Self {
            threshold: AtomicU8::new(level as u8),
            capture_source,
            layout,
            trap,
            shared: Mutex::new(SinkTable {
                streams: std::array::from_fn(|_| vec![primary.clone()]),
                closed: false,
            }),
        }
    }

    /// The current threshold.
    pub fn level(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Atomically update the threshold.
    ///
    /// Takes effect for subsequent calls only; records already emitted are
    /// not filtered retroactively.
    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a message at `level` passes the current threshold.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Gate, render, and write one message.
    ///
    /// If `level` is below the threshold the call returns before any
    /// formatting work. At [`Level::Panic`] the call never returns.
    #[track_caller]
    pub fn log(&self, level: Level, args: Arguments) {
        self.log_with(level, args, &[]);
    }

    /// Like [`log`](Logger::log), with structured key/value attributes.
    #[track_caller]
    pub fn log_with(&self, level: Level, args: Arguments, kvs: &[(&str, &dyn fmt::Display)]) {
        // a direct call keeps `#[track_caller]` propagation intact
        let source = if self.capture_source {
            Some(SourceLocation::caller())
        } else {
            None
        };
        self.dispatch(level, source, args, kvs);
    }

    /// Like [`log`](Logger::log), with an explicit call site.
    ///
    /// For wrappers that cannot propagate `#[track_caller]`, such as
    /// bridges replaying records captured elsewhere.
    pub fn log_from(&self, level: Level, source: SourceLocation, args: Arguments) {
        self.dispatch(level, self.capture_source.then_some(source), args, &[]);
    }

    /// Log a message at TRACE level.
    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Level::Trace, format_args!("{message}"));
    }

    /// Log a message at DEBUG level.
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, format_args!("{message}"));
    }

    /// Log a message at INFO level.
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, format_args!("{message}"));
    }

    /// Log a message at WARN level.
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warn, format_args!("{message}"));
    }

    /// Log a message at ERROR level.
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, format_args!("{message}"));
    }

    /// Log a message at PANIC level, then abort the calling control flow by
    /// panicking with the rendered record.
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.log(Level::Panic, format_args!("{message}"));
        unreachable!("a PANIC-level log returned");
    }

    /// Fan the given level's stream out to the original sink plus `extra`.
    ///
    /// A log call at that level is acknowledged only after every attached
    /// sink has been attempted; per-sink write errors go to the trap.
    ///
    /// # Examples
    ///
    /// ```
    /// use logward::Level;
    /// use logward::sink::Stderr;
    /// use logward::sink::Testing;
    ///
    /// let logger = logward::Logger::new(Level::Info, Testing::default());
    /// logger.add_output(Level::Error, Stderr::default());
    /// ```
    pub fn add_output(&self, level: Level, extra: impl Into<Box<dyn Sink>>) {
        let sink: Arc<dyn Sink> = Arc::from(extra.into());
        let mut table = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
        table.streams[level as usize].push(sink);
    }

    /// Flush every attached sink.
    ///
    /// Flush errors are reported to the trap.
    pub fn flush(&self) {
        let table = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
        if table.closed {
            return;
        }
        for sink in distinct_sinks(&table) {
            if let Err(err) = sink.flush() {
                self.trap.trap(&err);
            }
        }
    }

    /// Close every attached sink once and discard subsequent records.
    ///
    /// Idempotent: only the first call closes the sinks. Close failures are
    /// reported to the trap. In-flight `log` calls are serialized with the
    /// close by the same lock.
    pub fn close(&self) {
        let mut table = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
        if table.closed {
            return;
        }
        table.closed = true;
        for sink in distinct_sinks(&table) {
            if let Err(err) = sink.close() {
                self.trap.trap(&err);
            }
        }
    }

    fn dispatch(
        &self,
        level: Level,
        source: Option<SourceLocation>,
        args: Arguments,
        kvs: &[(&str, &dyn fmt::Display)],
    ) {
        let fatal = level == Level::Panic;
        if !self.enabled(level) {
            // the abort contract holds even when the record is filtered out
            if fatal {
                panic!("{args}");
            }
            return;
        }

        let payload: Cow<'static, str> = match args.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(args.to_string()),
        };
        let mut builder = Record::builder().level(level).source(source).payload(payload);
        for (key, value) in kvs {
            builder = builder.key_value(key.to_string(), value);
        }
        let record = builder.build();

        let rendered = self.write(&record, fatal);
        if fatal {
            match rendered {
                Some(text) => panic!("{text}"),
                None => panic!("{}", record.payload()),
            }
        }
    }

    // Render and write under the sink table lock. Returns the rendered line
    // when requested so the panic path can carry it.
    fn write(&self, record: &Record, want_rendered: bool) -> Option<String> {
        let table = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
        if table.closed {
            return None;
        }

        let mut bytes = match self.layout.format(record) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.trap.trap(&err);
                return None;
            }
        };
        let rendered = want_rendered.then(|| String::from_utf8_lossy(&bytes).into_owned());
        bytes.push(b'\n');

        for sink in &table.streams[record.level() as usize] {
            if let Err(err) = sink.write(&bytes) {
                self.trap.trap(&err);
            }
        }
        rendered
    }
}

// Sinks may appear in several level slots; visit each one once.
fn distinct_sinks(table: &SinkTable) -> Vec<&Arc<dyn Sink>> {
    let mut seen: Vec<*const ()> = Vec::new();
    let mut sinks = Vec::new();
    for slot in &table.streams {
        for sink in slot {
            let ptr = Arc::as_ptr(sink) as *const ();
            if !seen.contains(&ptr) {
                seen.push(ptr);
                sinks.push(sink);
            }
        }
    }
    sinks
}

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide default logger.
///
/// Lazily initialized to an all-levels logger writing to stdout, unless
/// [`set_default_logger`] installed a configured one first.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::new(Level::All, Stdout::default()))
}

/// Install the process-wide default logger.
///
/// This should be called early in the execution of a Rust program; any use
/// of [`default_logger`] beforehand pins the built-in one.
///
/// # Errors
///
/// Hand the logger back if the default logger has already been set.
pub fn set_default_logger(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}
