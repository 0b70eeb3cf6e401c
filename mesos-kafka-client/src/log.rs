// Copyright 2023 The RocketMQ Rust Authors
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

use std::str::FromStr;

use tracing::Level;

/// Initializes the logger from the `RUST_LOG` environment variable.
///
/// The value must be a plain level (`ERROR`, `WARN`, `INFO`, `DEBUG`, `TRACE`);
/// anything else, or no value, falls back to `INFO`. Output goes to stderr so
/// command output on stdout stays machine readable.
pub fn init_logger() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(Level::INFO);
    init_logger_with_level(level);
}

/// Initializes the logger with an explicit maximum level.
///
/// Calling it again after a subscriber is installed has no effect.
pub fn init_logger_with_level(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_thread_names(true)
        .with_level(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_max_level(level)
        .try_init();
}

fn parse_level(value: &str) -> Option<Level> {
    Level::from_str(value.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_accepts_any_case() {
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level("WARN"), Some(Level::WARN));
        assert_eq!(parse_level(" trace "), Some(Level::TRACE));
    }

    #[test]
    fn parse_level_rejects_directives() {
        assert_eq!(parse_level("mesos_kafka_client=debug"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logger_with_level(Level::ERROR);
        init_logger_with_level(Level::DEBUG);
    }
}
