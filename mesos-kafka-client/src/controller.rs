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

//! Broker lifecycle controller
//!
//! - [`BrokerController`] - primitives, rebalance barrier and workflows
//! - [`ControllerBuilder`] - fluent builder over [`ClientConfig`]

pub mod primitives;
pub mod rebalance;
pub mod workflow;

use std::time::Duration;

use mesos_kafka_error::MesosKafkaError;
use mesos_kafka_error::MesosKafkaResult;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::config::ClientConfig;
use crate::controller::rebalance::Sleeper;
use crate::controller::rebalance::ThreadSleeper;
use crate::transport::HttpTransport;
use crate::transport::Transport;

/// Endpoints of the broker-management API
pub mod api {
    pub const BROKER_LIST: &str = "/api/broker/list";
    pub const BROKER_ADD: &str = "/api/broker/add";
    pub const BROKER_START: &str = "/api/broker/start";
    pub const BROKER_STOP: &str = "/api/broker/stop";
    pub const BROKER_REMOVE: &str = "/api/broker/remove";
    pub const BROKER_UPDATE: &str = "/api/broker/update";
    pub const BROKER_REBALANCE: &str = "/api/broker/rebalance";
    pub const BROKER_REBALANCE_ALL: &str = "/api/broker/rebalance?broker=*";
}

/// How the rebalance barrier polls and how workflows treat its failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebalanceSettings {
    pub poll_interval: Duration,
    /// Consecutive failed status polls tolerated before giving up; 0 polls forever
    pub failure_budget: u32,
    /// Log and discard rebalance failures inside workflows instead of aborting
    pub lenient: bool,
}

impl Default for RebalanceSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(ClientConfig::DEFAULT_POLL_INTERVAL_MILLIS),
            failure_budget: ClientConfig::DEFAULT_REBALANCE_FAILURE_BUDGET,
            lenient: false,
        }
    }
}

/// Drives broker lifecycle operations against one Mesos Kafka framework
///
/// Every call blocks. Workflows process brokers strictly one after the other
/// and wait for the cluster to report an idle rebalance between structural
/// changes.
pub struct BrokerController<T, S = ThreadSleeper> {
    transport: T,
    sleeper: S,
    settings: RebalanceSettings,
}

impl<T, S> BrokerController<T, S>
where
    T: Transport,
    S: Sleeper,
{
    pub fn new(transport: T, sleeper: S, settings: RebalanceSettings) -> Self {
        Self {
            transport,
            sleeper,
            settings,
        }
    }

    #[inline]
    pub fn settings(&self) -> &RebalanceSettings {
        &self.settings
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET `path` and decode the JSON body
    fn get<R: DeserializeOwned>(&self, path: &str) -> MesosKafkaResult<R> {
        let body = self.transport.get_json(path)?;
        trace!("{path} -> {}", String::from_utf8_lossy(&body));
        serde_json::from_slice(&body).map_err(|e| MesosKafkaError::decode(path, e))
    }
}

/// Builder for creating and configuring broker controllers
///
/// # Examples
///
/// ```rust,no_run
/// use std::time::Duration;
///
/// use mesos_kafka_client::ControllerBuilder;
///
/// # fn main() -> mesos_kafka_error::MesosKafkaResult<()> {
/// let controller = ControllerBuilder::new()
///     .hostname("kafka-mesos.marathon.mesos")
///     .port(7000)
///     .poll_interval(Duration::from_secs(10))
///     .rebalance_failure_budget(6)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ControllerBuilder {
    config: ClientConfig,
}

impl ControllerBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Set the framework API base URL, e.g. `https://mesos-kafka:7000`
    ///
    /// Takes precedence over [`hostname`](Self::hostname) and [`port`](Self::port).
    #[inline]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = Some(url.into());
        self
    }

    #[inline]
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.config.hostname = Some(hostname.into());
        self
    }

    #[inline]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = Some(port);
        self
    }

    /// Pause between status polls; whole milliseconds, anything below 1 ms is rejected by `build`
    #[inline]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval_millis = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// 0 disables the budget and polls until `idle` no matter what
    #[inline]
    pub fn rebalance_failure_budget(mut self, budget: u32) -> Self {
        self.config.rebalance_failure_budget = budget;
        self
    }

    #[inline]
    pub fn lenient_rebalance(mut self, lenient: bool) -> Self {
        self.config.lenient_rebalance = lenient;
        self
    }

    #[inline]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout_millis = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a controller with the HTTP transport and a blocking sleeper
    ///
    /// # Errors
    ///
    /// Returns error if the settings fail [`ClientConfig::validate`], the
    /// configured base URL is invalid or the HTTP client cannot be created.
    pub fn build(self) -> MesosKafkaResult<BrokerController<HttpTransport>> {
        self.build_with_sleeper(ThreadSleeper)
    }

    pub fn build_with_sleeper<S: Sleeper>(self, sleeper: S) -> MesosKafkaResult<BrokerController<HttpTransport, S>> {
        self.config.validate()?;
        let base_url = self.config.base_url();
        let transport = HttpTransport::with_timeout(&base_url, self.config.request_timeout())?;
        Ok(BrokerController::new(transport, sleeper, self.config.rebalance_settings()))
    }
}
