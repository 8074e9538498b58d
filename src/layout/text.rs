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

use colored::Color;
use colored::Colorize;
use jiff::tz::TimeZone;

use crate::Error;
use crate::Level;
use crate::layout::Layout;
use crate::record::Record;

/// A layout that formats log records as a tagged line of text.
///
/// Output format:
///
/// ```text
/// ERROR 2026/08/23 17:30:05 src/server.rs:51 Hello error!
/// WARN  2026/08/23 17:30:05 src/server.rs:52 Hello warn!
/// INFO  2026/08/23 17:30:05 src/server.rs:53 Hello info! port=8080
/// ```
///
/// The date and time fields can be toggled off individually; the call site
/// is printed whenever the record carries one. The timestamp uses the
/// system timezone unless one is set with [`timezone`](TextLayout::timezone).
///
/// Level tags are plain by default. Call [`colorize`](TextLayout::colorize)
/// to color them, or set the `colors` with a [`LevelColor`] instance.
///
/// # Examples
///
/// ```
/// use logward::layout::TextLayout;
///
/// let layout = TextLayout::default();
/// ```
#[derive(Default, Debug, Clone)]
pub struct TextLayout {
    colors: Option<LevelColor>,
    tz: Option<TimeZone>,
    hide_date: bool,
    hide_time: bool,
}

/// Customize the color of each log level.
#[derive(Debug, Clone)]
pub struct LevelColor {
    pub panic: Color,
    pub error: Color,
    pub warn: Color,
    pub info: Color,
    pub debug: Color,
    pub trace: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            panic: Color::BrightRed,
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Green,
            debug: Color::Blue,
            trace: Color::Magenta,
        }
    }
}

impl LevelColor {
    fn pick(&self, level: Level) -> Color {
        match level {
            Level::Panic => self.panic,
            Level::Error => self.error,
            Level::Warn => self.warn,
            Level::Info => self.info,
            Level::Debug => self.debug,
            Level::Trace => self.trace,
            // threshold endpoints never reach a layout in practice
            Level::All | Level::Off => Color::White,
        }
    }
}

impl TextLayout {
    /// Set the timezone for timestamps.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logward::layout::TextLayout;
    ///
    /// let layout = TextLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    /// Color level tags with the default [`LevelColor`] palette.
    pub fn colorize(self) -> Self {
        self.colors(LevelColor::default())
    }

    /// Color level tags with a custom palette.
    pub fn colors(mut self, colors: LevelColor) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Omit the date field.
    pub fn no_date(mut self) -> Self {
        self.hide_date = true;
        self
    }

    /// Omit the time field.
    pub fn no_time(mut self) -> Self {
        self.hide_time = true;
        self
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let mut text = String::new();

        // SAFETY: write to a string always succeeds
        match &self.colors {
            Some(colors) => {
                let tag = record.level().tag().color(colors.pick(record.level()));
                write!(&mut text, "{tag}").unwrap();
            }
            None => write!(&mut text, "{}", record.level().tag()).unwrap(),
        }

        if !self.hide_date || !self.hide_time {
            let tz = self.tz.clone().unwrap_or_else(TimeZone::system);
            let zoned = record.time().to_zoned(tz);
            if !self.hide_date {
                write!(&mut text, " {}", zoned.strftime("%Y/%m/%d")).unwrap();
            }
            if !self.hide_time {
                write!(&mut text, " {}", zoned.strftime("%H:%M:%S")).unwrap();
            }
        }

        if let Some(source) = record.source() {
            write!(&mut text, " {source}").unwrap();
        }

        write!(&mut text, " {}", record.payload()).unwrap();

        for (key, value) in record.key_values() {
            write!(&mut text, " {key}={value}").unwrap();
        }

        Ok(text.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::record::SourceLocation;

    fn render(layout: &TextLayout, record: &Record) -> String {
        String::from_utf8(layout.format(record).unwrap()).unwrap()
    }

    #[test]
    fn test_full_line() {
        let record = Record::builder()
            .time(Timestamp::from_second(1_700_000_000).unwrap())
            .level(Level::Info)
            .source(Some(SourceLocation::new("src/server.rs", 42)))
            .payload("service started")
            .key_value("port", 8080)
            .build();

        let layout = TextLayout::default().timezone(TimeZone::UTC);
        assert_eq!(
            render(&layout, &record),
            "INFO  2023/11/14 22:13:20 src/server.rs:42 service started port=8080"
        );
    }

    #[test]
    fn test_toggles() {
        let record = Record::builder()
            .time(Timestamp::from_second(1_700_000_000).unwrap())
            .level(Level::Error)
            .payload("boom")
            .build();

        let layout = TextLayout::default()
            .timezone(TimeZone::UTC)
            .no_date()
            .no_time();
        assert_eq!(render(&layout, &record), "ERROR boom");

        let layout = TextLayout::default().timezone(TimeZone::UTC).no_date();
        assert_eq!(render(&layout, &record), "ERROR 22:13:20 boom");
    }

    #[test]
    fn test_tags_align() {
        let layout = TextLayout::default().no_date().no_time();
        for level in [Level::Trace, Level::Info, Level::Panic] {
            let record = Record::builder().level(level).payload("x").build();
            let line = render(&layout, &record);
            assert_eq!(line.len(), "TRACE x".len());
        }
    }
}
