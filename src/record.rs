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

//! Log records assembled on the emit path.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

use jiff::Timestamp;

use crate::Level;

/// The call site a log record was produced at.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Create a source location from an explicit file path and line.
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Capture the location of the caller.
    ///
    /// Wrappers around logging calls stay transparent by annotating
    /// themselves with `#[track_caller]`; the captured location is then the
    /// outermost annotated call site.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    /// The source file containing the call site.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The filename component of the source file, for layouts where the
    /// full path is noisy.
    pub fn filename(&self) -> &'static str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }

    /// The line of the call site.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// The payload of a log message.
///
/// Records are ephemeral: one is built only after the level gate passes and
/// lives for the duration of a single emit.
#[derive(Clone, Debug)]
pub struct Record {
    // the observed time
    time: Timestamp,

    // the metadata
    level: Level,
    source: Option<SourceLocation>,

    // the payload
    payload: Cow<'static, str>,

    // structural logging
    kvs: Vec<(Cow<'static, str>, String)>,
}

impl Record {
    /// The observed time.
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// The severity level of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The call site of the message, if captured.
    pub fn source(&self) -> Option<SourceLocation> {
        self.source
    }

    /// The message body.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The key-values attached to the message.
    pub fn key_values(&self) -> &[(Cow<'static, str>, String)] {
        &self.kvs
    }

    /// Returns a new builder.
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                time: Timestamp::now(),
                level: Level::Info,
                source: None,
                payload: Default::default(),
                kvs: vec![],
            },
        }
    }
}

impl RecordBuilder {
    /// Set [`time`](Record::time).
    pub fn time(mut self, time: Timestamp) -> Self {
        self.record.time = time;
        self
    }

    /// Set [`level`](Record::level).
    pub fn level(mut self, level: Level) -> Self {
        self.record.level = level;
        self
    }

    /// Set [`source`](Record::source).
    pub fn source(mut self, source: Option<SourceLocation>) -> Self {
        self.record.source = source;
        self
    }

    /// Set [`payload`](Record::payload).
    pub fn payload(mut self, payload: impl Into<Cow<'static, str>>) -> Self {
        self.record.payload = payload.into();
        self
    }

    /// Append one key-value attribute.
    pub fn key_value(mut self, key: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        self.record.kvs.push((key.into(), value.to_string()));
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record {
        self.record
    }
}
