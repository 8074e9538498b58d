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

use crate::Level;
use crate::layout::Layout;
use crate::layout::TextLayout;
use crate::logger::Logger;
use crate::sink::Sink;
use crate::sink::Stdout;
use crate::trap::StderrTrap;
use crate::trap::Trap;

/// Create a new [`LoggerBuilder`] with default settings.
///
/// Defaults: threshold [`Level::Info`], [`Stdout`] sink, [`TextLayout`],
/// source capture enabled, errors trapped to stderr.
///
/// # Examples
///
/// ```
/// use logward::Level;
/// use logward::sink::Stderr;
///
/// let logger = logward::builder()
///     .level(Level::Warn)
///     .sink(Stderr::default())
///     .build();
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder {
        level: Level::Info,
        capture_source: true,
        sink: None,
        layout: None,
        trap: None,
    }
}

/// A builder for configuring a [`Logger`].
///
/// # Examples
///
/// ```
/// use logward::Level;
/// use logward::layout::LogfmtLayout;
/// use logward::sink::Stdout;
///
/// let logger = logward::builder()
///     .level(Level::Debug)
///     .sink(Stdout::default())
///     .layout(LogfmtLayout::default())
///     .build();
/// ```
#[must_use = "call `build` to construct the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    level: Level,
    capture_source: bool,
    sink: Option<Box<dyn Sink>>,
    layout: Option<Box<dyn Layout>>,
    trap: Option<Box<dyn Trap>>,
}

impl LoggerBuilder {
    /// Set the initial threshold level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Toggle call-site capture.
    ///
    /// Enabled by default. When disabled, records carry no source location
    /// and layouts omit the `file:line` field.
    pub fn capture_source(mut self, capture: bool) -> Self {
        self.capture_source = capture;
        self
    }

    /// Set the primary sink all levels write to.
    ///
    /// Default to [`Stdout`].
    pub fn sink(mut self, sink: impl Into<Box<dyn Sink>>) -> Self {
        self.sink = Some(sink.into());
        self
    }

    /// Set the layout rendering records into their sink representation.
    ///
    /// Default to [`TextLayout`].
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Set the trap that swallowed errors are reported to.
    ///
    /// Default to [`StderrTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = Some(trap.into());
        self
    }

    /// Build the [`Logger`].
    pub fn build(self) -> Logger {
        Logger::from_parts(
            self.level,
            self.capture_source,
            self.layout
                .unwrap_or_else(|| Box::new(TextLayout::default())),
            self.trap.unwrap_or_else(|| Box::new(StderrTrap::default())),
            self.sink.unwrap_or_else(|| Box::new(Stdout::default())),
        )
    }
}
