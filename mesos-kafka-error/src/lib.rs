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

//! # Mesos Kafka Error Handling
//!
//! Error types shared by the broker lifecycle controller and the admin tools.
//!
//! Errors fall into three families:
//! - **Transport**: the remote API could not be reached, or answered with a non-2xx status
//! - **Decode**: the remote API answered with a payload that does not match the expected schema
//! - **Parse/Validation**: a caller-supplied broker identifier or field is unusable
//!
//! ### Usage
//!
//! ```rust
//! use mesos_kafka_error::MesosKafkaError;
//! use mesos_kafka_error::MesosKafkaResult;
//!
//! fn stop(broker_id: &str) -> MesosKafkaResult<()> {
//!     if broker_id.is_empty() {
//!         return Err(MesosKafkaError::validation_error("broker", "identifier cannot be empty"));
//!     }
//!     Ok(())
//! }
//! # assert!(stop("").is_err());
//! ```

pub mod unified;

pub use unified::MesosKafkaError;
pub use unified::MesosKafkaResult;
pub use unified::TransportError;
