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

//! Lifecycle workflows
//!
//! Brokers are processed one at a time, in the order given. The first failing
//! step aborts the whole batch: earlier brokers stay applied and later ones are
//! never touched, so callers must re-list the cluster to see how far a
//! workflow got.

use std::borrow::Cow;

use mesos_kafka_error::MesosKafkaError;
use mesos_kafka_error::MesosKafkaResult;
use tracing::info;
use tracing::warn;

use super::BrokerController;
use crate::controller::rebalance::Sleeper;
use crate::model::BrokerSpec;
use crate::transport::Transport;

impl<T, S> BrokerController<T, S>
where
    T: Transport,
    S: Sleeper,
{
    /// Add, start and rebalance each broker in turn
    ///
    /// When a spec has no id (or a blank one), the broker is added without an id
    /// and started under the id the framework assigned.
    pub fn create_brokers(&self, specs: &[BrokerSpec]) -> MesosKafkaResult<()> {
        for spec in specs {
            let unassigned = spec.id.trim().is_empty();
            let requested = if unassigned && !spec.id.is_empty() {
                Cow::Owned(BrokerSpec {
                    id: String::new(),
                    ..spec.clone()
                })
            } else {
                Cow::Borrowed(spec)
            };

            info!(broker = %requested.id, "Adding broker");
            let added = self.add_broker(&requested)?;

            let spec = match added.brokers.first() {
                Some(assigned) if unassigned => Cow::Owned(BrokerSpec {
                    id: assigned.id.clone(),
                    ..requested.into_owned()
                }),
                _ => requested,
            };

            info!(broker = %spec.id, "Starting broker");
            self.start_broker(&spec)?;
            self.settle(&spec.id)?;
        }
        Ok(())
    }

    /// Stop, remove and rebalance each broker in turn
    pub fn delete_brokers<I: AsRef<str>>(&self, ids: &[I]) -> MesosKafkaResult<()> {
        for id in ids {
            let id = id.as_ref();
            info!(broker = %id, "Stopping broker");
            self.stop_broker(id)?;
            info!(broker = %id, "Removing broker");
            self.remove_broker(id)?;
            self.settle(id)?;
        }
        Ok(())
    }

    /// Stop, update, start and rebalance each broker in turn
    ///
    /// The id of each spec must be numeric; it is checked before any request
    /// for that broker is sent.
    pub fn update_brokers(&self, specs: &[BrokerSpec]) -> MesosKafkaResult<()> {
        for spec in specs {
            let id: u32 = spec
                .id
                .parse()
                .map_err(|e| MesosKafkaError::parse(spec.id.as_str(), e))?;

            info!(broker = id, "Stopping broker for update");
            self.stop_broker(&id.to_string())?;
            info!(broker = id, "Updating broker");
            self.update_broker(spec)?;
            info!(broker = id, "Starting broker");
            self.start_broker(spec)?;
            self.settle(&spec.id)?;
        }
        Ok(())
    }

    /// Rebalance barrier as seen by a workflow
    fn settle(&self, broker: &str) -> MesosKafkaResult<()> {
        match self.rebalance_and_wait() {
            Ok(()) => Ok(()),
            Err(e) if self.settings.lenient => {
                warn!(broker = %broker, "Ignoring rebalance failure: {e}");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
