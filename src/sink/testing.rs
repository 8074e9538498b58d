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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;
use crate::sink::Sink;

/// A sink that captures rendered records in memory so tests can assert on
/// exactly what was written.
///
/// Cloning shares the same buffer, so a clone handed to a logger stays
/// readable from the test.
///
/// # Examples
///
/// ```
/// use logward::Level;
/// use logward::sink::Testing;
///
/// let sink = Testing::default();
/// let logger = logward::builder()
///     .level(Level::Info)
///     .sink(sink.clone())
///     .build();
///
/// logward::info!(logger, "hello");
/// assert_eq!(sink.lines().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Testing {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Testing {
    /// All bytes written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The captured records as lines of text.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.contents())
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Sink for Testing {
    fn write(&self, bytes: &[u8]) -> Result<(), Error> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(())
    }
}
