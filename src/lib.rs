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

//! Logward is a small leveled logging library: it tags, filters, and
//! timestamps short text messages before writing them to one or more sinks.
//!
//! # Overview
//!
//! A [`Logger`] gates every message against a dynamically adjustable
//! threshold [`Level`]. Messages that pass are rendered by a
//! [`Layout`](layout::Layout) (level tag, timestamp, optional call site,
//! key/values) and written atomically to the attached
//! [`Sink`](sink::Sink)s. A single level's stream can be fanned out to
//! extra sinks with [`Logger::add_output`]. Logging is best-effort: sink
//! errors are reported to a [`Trap`] and never reach the caller. The one
//! exception is [`Level::Panic`], which deliberately panics with the
//! rendered record after it has been written.
//!
//! # Examples
//!
//! ```
//! use logward::Level;
//! use logward::sink::Testing;
//!
//! let sink = Testing::default();
//! let logger = logward::builder()
//!     .level(Level::Info)
//!     .sink(sink.clone())
//!     .build();
//!
//! logward::debug!(logger, "not emitted");
//! logward::info!(logger, "service started on port {}", 8080);
//!
//! let lines = sink.lines();
//! assert_eq!(lines.len(), 1);
//! assert!(lines[0].contains("service started on port 8080"));
//! ```
//!
//! Fanning one level out to several sinks:
//!
//! ```
//! use logward::Level;
//! use logward::sink::Stderr;
//! use logward::sink::Testing;
//!
//! let logger = logward::Logger::new(Level::Info, Testing::default());
//! logger.add_output(Level::Error, Stderr::default());
//!
//! logward::error!(logger, "written to both sinks");
//! logger.close();
//! ```

pub mod bridge;
pub mod layout;
pub mod record;
pub mod sink;

mod error;
pub use error::Error;

mod level;
pub use level::Level;

mod trap;
pub use trap::StderrTrap;
pub use trap::Trap;

mod macros;

mod logger;
pub use logger::Logger;
pub use logger::LoggerBuilder;
pub use logger::builder;
pub use logger::default_logger;
pub use logger::set_default_logger;

pub use layout::Layout;
pub use record::Record;
pub use record::SourceLocation;
pub use sink::Sink;
