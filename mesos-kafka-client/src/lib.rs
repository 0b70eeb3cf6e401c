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

//! Mesos Kafka Client - broker lifecycle controller
//!
//! Drives the broker-management REST API of the Mesos Kafka framework.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     Workflows (controller/workflow)     │
//! │  - create: add → start → rebalance      │
//! │  - delete: stop → remove → rebalance    │
//! │  - update: stop → update → start → reb. │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │  Primitives + rebalance barrier         │
//! │  (controller/primitives, rebalance)     │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        Transport (transport)            │
//! │  - GET / PUT / DELETE JSON              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use mesos_kafka_client::BrokerSpec;
//! use mesos_kafka_client::ControllerBuilder;
//!
//! # fn main() -> mesos_kafka_error::MesosKafkaResult<()> {
//! let controller = ControllerBuilder::new().url("https://mesos-kafka:7000").build()?;
//!
//! let spec = BrokerSpec::new("3").with_cpus(1.5).with_mem(2048);
//! controller.create_brokers(&[spec])?;
//!
//! for broker in controller.list_brokers()?.brokers {
//!     println!("{} active={}", broker.id, broker.active);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod log;
pub mod model;
pub mod query;
pub mod transport;

pub use config::ClientConfig;
pub use controller::rebalance::Sleeper;
pub use controller::rebalance::ThreadSleeper;
pub use controller::BrokerController;
pub use controller::ControllerBuilder;
pub use controller::RebalanceSettings;
pub use mesos_kafka_error::MesosKafkaError;
pub use mesos_kafka_error::MesosKafkaResult;
pub use model::BrokerSpec;
pub use model::BrokerState;
pub use model::Brokers;
pub use model::ClusterStatus;
pub use model::FailoverPolicy;
pub use model::MutationResult;
pub use model::RebalanceStatus;
pub use transport::HttpTransport;
pub use transport::Transport;
