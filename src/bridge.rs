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

//! A bridge to forward logs from the `log` crate.

use crate::Level;
use crate::logger::default_logger;
use crate::record::SourceLocation;

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        default_logger().enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let logger = default_logger();
        let level = Level::from(record.level());
        match (record.file_static(), record.line()) {
            (Some(file), Some(line)) => {
                logger.log_from(level, SourceLocation::new(file, line), *record.args())
            }
            _ => logger.log(level, *record.args()),
        }
    }

    fn flush(&self) {
        default_logger().flush()
    }
}

/// Set up the log crate global logger.
///
/// All logs from the log crate will be forwarded to logward's default
/// logger. This should be called early in the execution of a Rust program;
/// any log events that occur before initialization will be ignored.
///
/// This function will set the global maximum log level to `Trace`. To
/// override this, call [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// if let Err(err) = logward::bridge::try_setup_log_crate() {
///     eprintln!("failed to setup log crate: {err}");
/// }
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// Like [`try_setup_log_crate`], but panic if the log crate global logger
/// has already been set.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "logward::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}
