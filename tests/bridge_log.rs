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
use logward::sink::Testing;

// A single test function: the bridge and the default logger are process-wide.
#[test]
fn test_log_crate_records_flow_into_default_logger() {
    let sink = Testing::default();
    let logger = logward::builder()
        .level(Level::Debug)
        .sink(sink.clone())
        .build();
    logward::set_default_logger(logger).expect("default logger already set");
    logward::bridge::setup_log_crate();

    log::info!("via the facade: {}", 42);
    log::trace!("below the threshold");

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("INFO"));
    assert!(lines[0].contains("via the facade: 42"));
    assert!(lines[0].contains("bridge_log.rs:"));
}
