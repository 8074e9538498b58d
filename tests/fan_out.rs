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

#[test]
fn test_fan_out_is_verbatim() {
    let primary = Testing::default();
    let second = Testing::default();
    let third = Testing::default();

    let logger = Logger::new(Level::Info, primary.clone());
    logger.add_output(Level::Error, second.clone());
    logger.add_output(Level::Error, third.clone());

    logward::error!(logger, "replicated {}", 1);

    assert_eq!(primary.lines().len(), 1);
    assert_eq!(primary.contents(), second.contents());
    assert_eq!(primary.contents(), third.contents());
}

#[test]
fn test_fan_out_is_per_level() {
    let primary = Testing::default();
    let errors_only = Testing::default();

    let logger = Logger::new(Level::Info, primary.clone());
    logger.add_output(Level::Error, errors_only.clone());

    logward::info!(logger, "stays on the primary sink");
    logward::warn!(logger, "so does this");

    assert_eq!(primary.lines().len(), 2);
    assert!(errors_only.lines().is_empty());

    logward::error!(logger, "goes to both");

    assert_eq!(primary.lines().len(), 3);
    assert_eq!(errors_only.lines().len(), 1);
    assert!(errors_only.lines()[0].contains("goes to both"));
}

#[test]
fn test_close_covers_fanned_out_sinks() {
    let primary = Testing::default();
    let extra = Testing::default();

    let logger = Logger::new(Level::Info, primary.clone());
    logger.add_output(Level::Warn, extra.clone());
    logger.add_output(Level::Error, extra.clone());

    logward::warn!(logger, "before close");
    logger.close();
    logward::warn!(logger, "after close");

    assert_eq!(primary.lines().len(), 1);
    assert_eq!(extra.lines().len(), 1);
}
