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

//! Rebalance barrier
//!
//! ```text
//! triggered ──► polling ──► idle      (status == "idle")
//!                 │  ▲
//!                 └──┘                (any other status, or a failed poll within budget)
//!                 │
//!                 └───────► stalled   (failed polls exceed the failure budget)
//! ```
//!
//! There is no deadline: the barrier waits for as long as the framework keeps
//! answering with a non-idle status.

use std::time::Duration;

use mesos_kafka_error::MesosKafkaError;
use mesos_kafka_error::MesosKafkaResult;
use tracing::info;
use tracing::warn;

use super::api;
use super::BrokerController;
use crate::model::MutationResult;
use crate::model::RebalanceStatus;
use crate::transport::Transport;

/// Suspends the calling thread between rebalance status polls
#[cfg_attr(test, mockall::automock)]
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by [`std::thread::sleep`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    #[inline]
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<T, S> BrokerController<T, S>
where
    T: Transport,
    S: Sleeper,
{
    /// Query the current rebalance status once
    pub fn rebalance_status(&self) -> MesosKafkaResult<RebalanceStatus> {
        self.get(api::BROKER_REBALANCE)
    }

    /// Trigger a rebalance of all brokers and block until the framework reports `idle`
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the trigger request fails or cannot be decoded
    /// - more than `failure_budget` consecutive status polls fail
    pub fn rebalance_and_wait(&self) -> MesosKafkaResult<()> {
        let _: MutationResult = self.get(api::BROKER_REBALANCE_ALL)?;

        let budget = self.settings.failure_budget;
        let mut failures = 0u32;
        loop {
            match self.rebalance_status() {
                Ok(status) if status.is_idle() => {
                    info!("Rebalance complete");
                    return Ok(());
                }
                Ok(status) => {
                    failures = 0;
                    info!(
                        status = %status.status,
                        code = status.status_code,
                        "Waiting for rebalance... {}",
                        status.message
                    );
                }
                Err(e) => {
                    failures = failures.saturating_add(1);
                    if budget != 0 && failures > budget {
                        return Err(MesosKafkaError::rebalance_stalled(failures, e));
                    }
                    warn!("Rebalance status poll failed ({failures} in a row): {e}");
                }
            }
            self.sleeper.sleep(self.settings.poll_interval);
        }
    }
}
