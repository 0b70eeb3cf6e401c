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

//! Broker records exchanged with the Mesos Kafka REST API

use serde::Deserialize;
use serde::Serialize;

/// Status value the rebalance endpoint reports once the cluster is quiescent
pub const REBALANCE_IDLE: &str = "idle";

/// Desired state of one broker, as declared by the caller
///
/// Optional fields left as `None` (or set to zero/empty) are not sent to the
/// remote API, which then applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrokerSpec {
    /// Broker identifier; may be empty on add to let the framework pick one
    pub id: String,
    pub mem: Option<u64>,
    pub heap: Option<u64>,
    pub cpus: Option<f64>,
    pub jvm_options: String,
    pub log4j_options: String,
    pub constraints: String,
    pub options: String,
    pub failover: FailoverPolicy,
}

impl BrokerSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_cpus(mut self, cpus: f64) -> Self {
        self.cpus = Some(cpus);
        self
    }

    pub fn with_mem(mut self, mem: u64) -> Self {
        self.mem = Some(mem);
        self
    }

    pub fn with_heap(mut self, heap: u64) -> Self {
        self.heap = Some(heap);
        self
    }

    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }

    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = constraints.into();
        self
    }

    pub fn with_failover(mut self, failover: FailoverPolicy) -> Self {
        self.failover = failover;
        self
    }
}

/// Restart policy the framework applies when a broker process fails
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FailoverPolicy {
    /// Initial delay, e.g. `1m`
    pub delay: Option<String>,
    pub max_delay: Option<String>,
    pub max_tries: Option<u32>,
}

/// Broker as reported by the remote API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrokerState {
    pub id: String,
    pub active: bool,
    pub mem: u64,
    pub heap: u64,
    pub cpus: f64,
    pub jvm_options: String,
    pub log4j_options: String,
    pub constraints: String,
    pub options: String,
    pub failover: FailoverPolicy,
}

impl From<BrokerState> for BrokerSpec {
    fn from(state: BrokerState) -> Self {
        Self {
            id: state.id,
            mem: Some(state.mem).filter(|mem| *mem != 0),
            heap: Some(state.heap).filter(|heap| *heap != 0),
            cpus: Some(state.cpus).filter(|cpus| *cpus != 0.0),
            jvm_options: state.jvm_options,
            log4j_options: state.log4j_options,
            constraints: state.constraints,
            options: state.options,
            failover: state.failover,
        }
    }
}

/// Point-in-time snapshot of every broker known to the framework
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterStatus {
    pub brokers: Vec<BrokerState>,
}

impl ClusterStatus {
    pub fn find(&self, id: &str) -> Option<&BrokerState> {
        self.brokers.iter().find(|broker| broker.id == id)
    }
}

/// Brokers created by an add request
pub type Brokers = ClusterStatus;

/// Rebalance progress as reported by the rebalance endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebalanceStatus {
    pub status: String,
    pub status_code: i32,
    pub message: String,
}

impl RebalanceStatus {
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.status == REBALANCE_IDLE
    }
}

/// Acknowledgement of an action the framework performs asynchronously
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationResult {
    pub started: Option<StartedFlag>,
}

/// The framework reports `started` either as a boolean or as a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StartedFlag {
    Bool(bool),
    Text(String),
}

impl MutationResult {
    /// Whether the framework explicitly refused the action
    pub fn is_rejected(&self) -> bool {
        match &self.started {
            Some(StartedFlag::Bool(started)) => !started,
            Some(StartedFlag::Text(text)) => text.eq_ignore_ascii_case("false"),
            None => false,
        }
    }
}
