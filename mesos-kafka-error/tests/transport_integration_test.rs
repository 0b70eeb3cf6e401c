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

//! Integration tests for TransportError with MesosKafkaError

use mesos_kafka_error::MesosKafkaError;
use mesos_kafka_error::MesosKafkaResult;
use mesos_kafka_error::TransportError;

fn stop_broker(status: u16) -> MesosKafkaResult<()> {
    Err(TransportError::unexpected_status("https://mesos:7000/api/broker/stop?broker=1", status, "no such broker").into())
}

#[test]
fn test_transport_error_into_mesos_kafka_error() {
    let err = MesosKafkaError::from(TransportError::invalid_url("::", "empty host"));
    assert!(matches!(err, MesosKafkaError::Transport(TransportError::InvalidUrl { .. })));
    assert!(err.to_string().contains("empty host"));
}

#[test]
fn test_transport_error_result_propagation() {
    fn workflow() -> MesosKafkaResult<()> {
        stop_broker(404)?;
        Ok(())
    }

    match workflow() {
        Err(MesosKafkaError::Transport(transport)) => {
            assert_eq!(transport.status(), Some(404));
            assert!(transport.to_string().contains("no such broker"));
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[test]
fn test_transport_error_is_transparent() {
    let transport = TransportError::unexpected_status("https://mesos:7000/api/broker/list", 500, "oops");
    let expected = transport.to_string();
    let err: MesosKafkaError = transport.into();
    assert_eq!(err.to_string(), expected);
}
