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

use std::panic::AssertUnwindSafe;
use std::panic::catch_unwind;

use logward::Level;
use logward::Logger;
use logward::sink::Testing;

#[test]
fn test_panic_level_writes_then_aborts() {
    let sink = Testing::default();
    let logger = Logger::new(Level::All, sink.clone());

    let result = catch_unwind(AssertUnwindSafe(|| {
        logward::panic!(logger, "going down {}", 3);
    }));

    let err = result.unwrap_err();
    let text = err.downcast_ref::<String>().expect("panic carries the rendered line");
    assert!(text.contains("PANIC"));
    assert!(text.contains("going down 3"));

    // the record was observably written before the abort
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("PANIC"));
    assert!(lines[0].contains("going down 3"));
}

#[test]
fn test_panic_method_diverges() {
    let sink = Testing::default();
    let logger = Logger::new(Level::All, sink.clone());

    let result = catch_unwind(AssertUnwindSafe(|| {
        logger.panic("fatal state");
    }));

    assert!(result.is_err());
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn test_gated_panic_still_aborts() {
    let sink = Testing::default();
    let logger = Logger::new(Level::Off, sink.clone());

    let result = catch_unwind(AssertUnwindSafe(|| {
        logward::panic!(logger, "silent {}", 1);
    }));

    let err = result.unwrap_err();
    let text = err.downcast_ref::<String>().expect("panic carries the message");
    assert_eq!(text, "silent 1");
    assert!(sink.lines().is_empty());
}

#[test]
fn test_logger_usable_after_caught_panic() {
    let sink = Testing::default();
    let logger = Logger::new(Level::All, sink.clone());

    let _ = catch_unwind(AssertUnwindSafe(|| {
        logward::panic!(logger, "first failure");
    }));
    logger.info("still alive");

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("still alive"));
}
