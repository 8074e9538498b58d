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

//! Per-level logging macros.
//!
//! Each macro takes the logger as its first argument, then a format string
//! and arguments. Key/value attributes follow after a semicolon:
//!
//! ```
//! use logward::Level;
//! use logward::sink::Testing;
//!
//! let sink = Testing::default();
//! let logger = logward::Logger::new(Level::Info, sink.clone());
//!
//! logward::info!(logger, "listening on port {}", 8080; proto = "tcp");
//! assert!(sink.lines()[0].contains("proto=tcp"));
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, $logger:expr, $fmt:literal $(, $arg:expr)* ; $($key:ident = $value:expr),+ $(,)?) => {
        $logger.log_with(
            $level,
            ::core::format_args!($fmt $(, $arg)*),
            &[$((::core::stringify!($key), &$value as &dyn ::core::fmt::Display)),+],
        )
    };
    ($level:expr, $logger:expr, $($arg:tt)+) => {
        $logger.log($level, ::core::format_args!($($arg)+))
    };
}

/// Log a formatted message at TRACE level.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($crate::Level::Trace, $logger, $($arg)+)
    };
}

/// Log a formatted message at DEBUG level.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($crate::Level::Debug, $logger, $($arg)+)
    };
}

/// Log a formatted message at INFO level.
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
/// logward::info!(logger, "hello {}", "world");
/// assert!(sink.lines()[0].contains("hello world"));
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($crate::Level::Info, $logger, $($arg)+)
    };
}

/// Log a formatted message at WARN level.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($crate::Level::Warn, $logger, $($arg)+)
    };
}

/// Log a formatted message at ERROR level.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($crate::Level::Error, $logger, $($arg)+)
    };
}

/// Log a formatted message at PANIC level, then panic with the rendered
/// record once it has been written.
#[macro_export]
macro_rules! panic {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($crate::Level::Panic, $logger, $($arg)+)
    };
}
