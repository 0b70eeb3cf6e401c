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

//! Desired-state broker files
//!
//! A broker file lists the brokers `createBrokers` and `updateBrokers` apply,
//! in the same `{"brokers": [...]}` shape `brokerList -o json` prints, so a
//! listing can be edited and fed back. Files ending in `.yaml`/`.yml` are read
//! as YAML, anything else as JSON.

use std::fs;
use std::path::Path;

use mesos_kafka_client::BrokerSpec;
use mesos_kafka_error::MesosKafkaError;
use mesos_kafka_error::MesosKafkaResult;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DesiredState {
    pub brokers: Vec<BrokerSpec>,
}

impl DesiredState {
    pub fn load(path: &Path) -> MesosKafkaResult<Self> {
        let content = fs::read_to_string(path)?;
        let state = if is_yaml(path) {
            serde_yaml::from_str::<DesiredState>(&content)
                .map_err(|e| MesosKafkaError::invalid_broker_file(path.display().to_string(), e.to_string()))?
        } else {
            serde_json::from_str::<DesiredState>(&content)
                .map_err(|e| MesosKafkaError::invalid_broker_file(path.display().to_string(), e.to_string()))?
        };
        debug!("loaded {} broker(s) from {}", state.brokers.len(), path.display());
        Ok(state)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.brokers.iter().map(|spec| spec.id.as_str()).collect()
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_yaml_brokers() {
        let file = write_file(
            ".yaml",
            "brokers:\n  - id: \"1\"\n    cpus: 1.5\n    mem: 4096\n    jvmOptions: \"-Xms1g\"\n    failover:\n      \
             maxTries: 3\n  - id: \"2\"\n",
        );

        let state = DesiredState::load(file.path()).unwrap();

        assert_eq!(state.ids(), vec!["1", "2"]);
        let first = &state.brokers[0];
        assert_eq!(first.cpus, Some(1.5));
        assert_eq!(first.mem, Some(4096));
        assert_eq!(first.jvm_options, "-Xms1g");
        assert_eq!(first.failover.max_tries, Some(3));
        assert_eq!(state.brokers[1], BrokerSpec::new("2"));
    }

    #[test]
    fn load_json_accepts_list_output() {
        let file = write_file(
            ".json",
            r#"{"brokers":[{"id":"0","active":true,"mem":2048,"heap":1024,"cpus":0.5,"options":"log.dirs=/kafka"}]}"#,
        );

        let state = DesiredState::load(file.path()).unwrap();

        assert_eq!(state.brokers.len(), 1);
        assert_eq!(state.brokers[0].heap, Some(1024));
        assert_eq!(state.brokers[0].options, "log.dirs=/kafka");
    }

    #[test]
    fn malformed_file_names_path() {
        let file = write_file(".json", "{\"brokers\": [");

        let err = DesiredState::load(file.path()).unwrap_err();

        assert!(matches!(err, MesosKafkaError::InvalidBrokerFile { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DesiredState::load(Path::new("/nonexistent/brokers.yaml")).unwrap_err();
        assert!(matches!(err, MesosKafkaError::IO(_)));
    }
}
