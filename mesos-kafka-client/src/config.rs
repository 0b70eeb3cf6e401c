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

use std::path::Path;
use std::time::Duration;

use config::Config;
use config::Environment;
use mesos_kafka_error::MesosKafkaError;
use mesos_kafka_error::MesosKafkaResult;
use serde::Deserialize;
use serde::Serialize;
use tracing::info;

use crate::controller::RebalanceSettings;

/// Prefix of environment variables overriding [`ClientConfig`] fields
pub const ENV_PREFIX: &str = "MESOS_KAFKA";

/// Connection and rebalance settings of a broker controller
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Full base URL; wins over `hostname`/`port`
    pub url: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub poll_interval_millis: u64,
    pub rebalance_failure_budget: u32,
    pub lenient_rebalance: bool,
    pub request_timeout_millis: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: None,
            hostname: None,
            port: None,
            poll_interval_millis: Self::DEFAULT_POLL_INTERVAL_MILLIS,
            rebalance_failure_budget: Self::DEFAULT_REBALANCE_FAILURE_BUDGET,
            lenient_rebalance: false,
            request_timeout_millis: None,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_HOSTNAME: &'static str = "localhost";
    pub const DEFAULT_PORT: u16 = 7000;
    pub const DEFAULT_POLL_INTERVAL_MILLIS: u64 = 5_000;
    pub const DEFAULT_REBALANCE_FAILURE_BUDGET: u32 = 12;

    /// Load from an optional file, then apply `MESOS_KAFKA_*` environment overrides
    pub fn load(config_file: Option<&Path>) -> MesosKafkaResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path));
        }
        let cfg = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| MesosKafkaError::config_parse_failed(e.to_string()))?;
        let config = cfg
            .try_deserialize::<ClientConfig>()
            .map_err(|e| MesosKafkaError::config_parse_failed(e.to_string()))?;
        config.validate()?;
        info!("mesos-kafka client config: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> MesosKafkaResult<()> {
        if self.poll_interval_millis == 0 {
            return Err(MesosKafkaError::config_invalid_value(
                "poll_interval_millis",
                "0",
                "poll interval must be positive",
            ));
        }
        if let Some(hostname) = self.hostname.as_deref().filter(|h| h.trim().is_empty()) {
            return Err(MesosKafkaError::config_invalid_value(
                "hostname",
                hostname,
                "hostname cannot be blank",
            ));
        }
        Ok(())
    }

    /// Base URL the transport resolves endpoint paths against
    pub fn base_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "https://{}:{}",
                self.hostname.as_deref().unwrap_or(Self::DEFAULT_HOSTNAME),
                self.port.unwrap_or(Self::DEFAULT_PORT)
            ),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_millis.map(Duration::from_millis)
    }

    pub fn rebalance_settings(&self) -> RebalanceSettings {
        RebalanceSettings {
            poll_interval: Duration::from_millis(self.poll_interval_millis),
            failure_budget: self.rebalance_failure_budget,
            lenient: self.lenient_rebalance,
        }
    }
}
