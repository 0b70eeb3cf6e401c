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

//! Single-request broker operations
//!
//! Each operation issues exactly one GET and decodes exactly one response.
//! The framework exposes its mutations as GET endpoints.

use mesos_kafka_error::MesosKafkaError;
use mesos_kafka_error::MesosKafkaResult;
use tracing::debug;

use super::api;
use super::BrokerController;
use crate::controller::rebalance::Sleeper;
use crate::model::Brokers;
use crate::model::BrokerSpec;
use crate::model::ClusterStatus;
use crate::model::MutationResult;
use crate::query::encode_broker_id;
use crate::query::encode_broker_query;
use crate::transport::Transport;

impl<T, S> BrokerController<T, S>
where
    T: Transport,
    S: Sleeper,
{
    /// Fetch a fresh snapshot of every broker
    pub fn list_brokers(&self) -> MesosKafkaResult<ClusterStatus> {
        self.get(api::BROKER_LIST)
    }

    /// Register a broker; an empty id lets the framework assign one
    pub fn add_broker(&self, spec: &BrokerSpec) -> MesosKafkaResult<Brokers> {
        let path = format!("{}?{}", api::BROKER_ADD, encode_broker_query(spec));
        debug!(broker = %spec.id, "add broker");
        self.get(&path)
    }

    pub fn start_broker(&self, spec: &BrokerSpec) -> MesosKafkaResult<MutationResult> {
        require_id(&spec.id)?;
        let path = format!("{}?{}", api::BROKER_START, encode_broker_id(&spec.id));
        debug!(broker = %spec.id, "start broker");
        self.acknowledged("start", &spec.id, &path)
    }

    pub fn stop_broker(&self, id: &str) -> MesosKafkaResult<MutationResult> {
        require_id(id)?;
        let path = format!("{}?{}", api::BROKER_STOP, encode_broker_id(id));
        debug!(broker = %id, "stop broker");
        self.acknowledged("stop", id, &path)
    }

    pub fn remove_broker(&self, id: &str) -> MesosKafkaResult<MutationResult> {
        require_id(id)?;
        let path = format!("{}?{}", api::BROKER_REMOVE, encode_broker_id(id));
        debug!(broker = %id, "remove broker");
        self.acknowledged("remove", id, &path)
    }

    /// Re-send the full sparse spec of an existing broker
    pub fn update_broker(&self, spec: &BrokerSpec) -> MesosKafkaResult<MutationResult> {
        require_id(&spec.id)?;
        let path = format!("{}?{}", api::BROKER_UPDATE, encode_broker_query(spec));
        debug!(broker = %spec.id, "update broker");
        self.acknowledged("update", &spec.id, &path)
    }

    /// GET a mutation and fail if the framework answered `started: false`
    fn acknowledged(&self, operation: &'static str, id: &str, path: &str) -> MesosKafkaResult<MutationResult> {
        let result: MutationResult = self.get(path)?;
        if result.is_rejected() {
            return Err(MesosKafkaError::rejected(operation, id));
        }
        Ok(result)
    }
}

fn require_id(id: &str) -> MesosKafkaResult<()> {
    if id.trim().is_empty() {
        return Err(MesosKafkaError::validation_error(
            "broker",
            "broker identifier cannot be empty",
        ));
    }
    Ok(())
}
