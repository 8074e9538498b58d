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

use std::fmt::Write;

use jiff::tz::TimeZone;

use crate::Error;
use crate::layout::Layout;
use crate::record::Record;

/// A logfmt layout for formatting log records.
///
/// Output format:
///
/// ```text
/// time=2026-08-23T17:30:05.986032+08:00 level=TRACE source=main.rs:22 msg="Hello trace!"
/// time=2026-08-23T17:30:05.991233+08:00 level=DEBUG source=main.rs:23 msg="Hello debug!"
/// time=2026-08-23T17:30:05.991239+08:00 level=INFO source=main.rs:24 msg="Hello info!" port=8080
/// ```
///
/// # Examples
///
/// ```
/// use logward::layout::LogfmtLayout;
///
/// let layout = LogfmtLayout::default();
/// ```
#[derive(Default, Debug, Clone)]
pub struct LogfmtLayout {
    tz: Option<TimeZone>,
}

impl LogfmtLayout {
    /// Set the timezone for timestamps.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logward::layout::LogfmtLayout;
    ///
    /// let layout = LogfmtLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }
}

// The encode logic follows https://github.com/go-logfmt/logfmt/blob/76262ea7/encode.go.
fn push_pair(text: &mut String, key: &str, value: &str) -> Result<(), Error> {
    if key.contains([' ', '=', '"']) {
        // omit keys that contain special chars
        return Err(Error::new(format!("key contains special chars: {key}")));
    }

    // SAFETY: write to a string always succeeds
    if value.is_empty() || value.contains([' ', '=', '"']) {
        write!(text, " {key}=\"{}\"", value.escape_debug()).unwrap();
    } else {
        write!(text, " {key}={value}").unwrap();
    }

    Ok(())
}

impl Layout for LogfmtLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let ts = record.time();
        let tz = self.tz.clone().unwrap_or_else(TimeZone::system);
        let offset = tz.to_offset(ts);
        let time = ts.display_with_offset(offset);

        let mut text = format!("time={time:.6}");

        push_pair(&mut text, "level", record.level().as_str())?;
        if let Some(source) = record.source() {
            push_pair(
                &mut text,
                "source",
                &format!("{}:{}", source.filename(), source.line()),
            )?;
        }
        push_pair(&mut text, "msg", record.payload())?;

        for (key, value) in record.key_values() {
            push_pair(&mut text, key, value)?;
        }

        Ok(text.into_bytes())
    }
}
