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

//! Ordered severity levels and their label table.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// An ordered severity level.
///
/// Levels compare purely numerically:
/// `All < Trace < Debug < Info < Warn < Error < Panic < Off`.
///
/// `All` and `Off` are threshold endpoints: a logger whose threshold is
/// `All` emits every message, one whose threshold is `Off` emits none.
///
/// # Examples
///
/// ```
/// use logward::Level;
///
/// assert!(Level::Debug < Level::Info);
/// assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Threshold endpoint that enables every level.
    All = 0,
    /// Designates very low priority, often extremely verbose, information.
    Trace = 1,
    /// Designates lower priority information.
    Debug = 2,
    /// Designates useful information.
    Info = 3,
    /// Designates hazardous situations.
    Warn = 4,
    /// Designates very serious errors.
    Error = 5,
    /// Designates unrecoverable errors; logging at this level aborts the
    /// calling control flow once the record has been written.
    Panic = 6,
    /// Threshold endpoint that disables every level.
    Off = 7,
}

impl Level {
    pub(crate) const COUNT: usize = 8;

    /// All defined levels, in ascending order.
    pub const LEVELS: [Level; Level::COUNT] = [
        Level::All,
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Panic,
        Level::Off,
    ];

    /// Return the string label of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::All => "ALL",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Panic => "PANIC",
            Level::Off => "OFF",
        }
    }

    /// Return the fixed-width tag used by textual layouts.
    ///
    /// Every tag occupies exactly five columns.
    pub fn tag(&self) -> &'static str {
        match self {
            Level::All => "ALL  ",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO ",
            Level::Warn => "WARN ",
            Level::Error => "ERROR",
            Level::Panic => "PANIC",
            Level::Off => "OFF  ",
        }
    }

    pub(crate) fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::All,
            1 => Level::Trace,
            2 => Level::Debug,
            3 => Level::Info,
            4 => Level::Warn,
            5 => Level::Error,
            6 => Level::Panic,
            _ => Level::Off,
        }
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for level in Level::LEVELS {
            if s.eq_ignore_ascii_case(level.as_str()) {
                return Ok(level);
            }
        }

        Err(Error::new(format!("malformed level: {s:?}")))
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Level {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_levels_ordered() {
        for pair in Level::LEVELS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(Level::All < Level::Trace);
        assert!(Level::Panic < Level::Off);
    }

    #[test]
    fn test_label_table_bijective() {
        let labels: HashSet<&str> = Level::LEVELS.iter().map(Level::as_str).collect();
        assert_eq!(labels.len(), Level::COUNT);

        for level in Level::LEVELS {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
            assert_eq!(
                level.as_str().to_lowercase().parse::<Level>().unwrap(),
                level
            );
        }
    }

    #[test]
    fn test_tags_fixed_width() {
        for level in Level::LEVELS {
            assert_eq!(level.tag().len(), 5);
            assert!(!level.tag().trim().is_empty());
            assert_eq!(level.tag().trim_end(), level.as_str());
        }
    }

    #[test]
    fn test_malformed_level() {
        assert!("verbose".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_from_u8_round_trip() {
        for level in Level::LEVELS {
            assert_eq!(Level::from_u8(level as u8), level);
        }
    }
}
