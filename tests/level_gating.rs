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

use logward::Level;
use logward::Logger;
use logward::sink::Testing;

const EMIT_LEVELS: [Level; 5] = [
    Level::Trace,
    Level::Debug,
    Level::Info,
    Level::Warn,
    Level::Error,
];

#[test]
fn test_threshold_matrix() {
    for threshold in Level::LEVELS {
        let sink = Testing::default();
        let logger = Logger::new(threshold, sink.clone());

        for level in EMIT_LEVELS {
            logger.log(level, format_args!("message at {level}"));
        }

        let expected = EMIT_LEVELS.iter().filter(|l| **l >= threshold).count();
        assert_eq!(
            sink.lines().len(),
            expected,
            "wrong emit count for threshold {threshold}"
        );
    }
}

#[test]
fn test_info_threshold_example() {
    let sink = Testing::default();
    let logger = Logger::new(Level::Info, sink.clone());

    logger.debug("x");
    logger.info("hello");
    logward::error!(logger, "boom {}", 7);

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("INFO"));
    assert!(lines[0].contains("hello"));
    assert!(lines[1].contains("ERROR"));
    assert!(lines[1].contains("boom 7"));
}

#[test]
fn test_off_threshold_silences_everything() {
    let sink = Testing::default();
    let logger = Logger::new(Level::Off, sink.clone());

    for level in EMIT_LEVELS {
        logger.log(level, format_args!("dropped"));
    }
    assert!(sink.lines().is_empty());
}

#[test]
fn test_set_level_applies_to_subsequent_calls_only() {
    let sink = Testing::default();
    let logger = Logger::new(Level::Error, sink.clone());

    logward::warn!(logger, "dropped before the change");
    logger.set_level(Level::Trace);
    logward::warn!(logger, "kept after the change");
    logward::trace!(logger, "also kept");

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("kept after the change"));
    assert!(lines[1].contains("also kept"));
}

#[test]
fn test_key_values_rendered() {
    let sink = Testing::default();
    let logger = Logger::new(Level::Info, sink.clone());

    logward::info!(logger, "request handled"; method = "GET", status = 200);

    let line = &sink.lines()[0];
    assert!(line.contains("request handled"));
    assert!(line.contains("method=GET"));
    assert!(line.contains("status=200"));
}

#[test]
fn test_close_discards_later_records() {
    let sink = Testing::default();
    let logger = Logger::new(Level::All, sink.clone());

    logward::info!(logger, "kept");
    logger.close();
    logger.close();
    logward::info!(logger, "discarded");

    assert_eq!(sink.lines().len(), 1);
}
