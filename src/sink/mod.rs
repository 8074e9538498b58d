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

//! Sinks that rendered log records are written to.

use std::fmt;

use crate::Error;

mod file;
mod stdio;
mod testing;

pub use self::file::FileSink;
pub use self::file::FileSinkBuilder;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::testing::Testing;

/// A destination byte stream for rendered log records.
///
/// A sink receives whole rendered lines. The owning
/// [`Logger`](crate::Logger) serializes all calls, so implementations never
/// observe interleaved writes.
pub trait Sink: fmt::Debug + Send + Sync + 'static {
    /// Write one rendered record to the destination.
    fn write(&self, bytes: &[u8]) -> Result<(), Error>;

    /// Flush any buffered bytes.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Release the underlying resource.
    ///
    /// Called at most once by the owning logger. Default to flushing.
    fn close(&self) -> Result<(), Error> {
        self.flush()
    }
}

impl<T: Sink> From<T> for Box<dyn Sink> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
