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

//! Mesos Kafka Tools - admin command line for the Mesos Kafka framework
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           CLI Layer (bin/)              │
//! │  - Command parsing (clap)               │
//! │  - Output formatting (formatters/)      │
//! │  - Input validation (validators/)       │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        Broker commands (commands/)      │
//! │  - brokerList / rebalanceStatus         │
//! │  - createBrokers / deleteBrokers        │
//! │  - updateBrokers / rebalance            │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │     mesos-kafka-client controller       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```bash
//! mesos-kafka-admin-cli broker brokerList -u https://mesos-kafka:7000
//! mesos-kafka-admin-cli broker createBrokers -u https://mesos-kafka:7000 -f brokers.yaml
//! mesos-kafka-admin-cli broker deleteBrokers -b 3,4
//! ```

pub mod cli;
pub mod commands;
pub mod desired_state;
pub mod mesos_kafka_cli;
