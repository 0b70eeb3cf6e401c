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

use serde::Serialize;

use super::Formatter;

/// Pretty-printed JSON, the shape broker files are read back in
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format<T: Serialize>(&self, data: &T) -> String {
        serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use mesos_kafka_client::BrokerState;
    use mesos_kafka_client::ClusterStatus;

    use super::*;
    use crate::desired_state::DesiredState;

    #[test]
    fn test_listing_reads_back_as_broker_file() {
        let status = ClusterStatus {
            brokers: vec![BrokerState {
                id: "3".to_string(),
                active: true,
                mem: 4096,
                cpus: 1.5,
                ..BrokerState::default()
            }],
        };

        let output = JsonFormatter.format(&status);
        assert!(output.contains("\"active\": true"));

        let state: DesiredState = serde_json::from_str(&output).unwrap();
        assert_eq!(state.ids(), vec!["3"]);
        assert_eq!(state.brokers[0].mem, Some(4096));
        assert_eq!(state.brokers[0].cpus, Some(1.5));
    }
}
