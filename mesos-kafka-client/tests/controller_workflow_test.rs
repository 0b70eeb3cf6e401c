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

//! End-to-end workflows against a scripted framework

mod common;

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use common::FakeFramework;
use common::RecordedRequest;
use common::RecordingSleeper;
use mesos_kafka_client::BrokerController;
use mesos_kafka_client::BrokerSpec;
use mesos_kafka_client::ControllerBuilder;
use mesos_kafka_client::HttpTransport;
use mesos_kafka_error::MesosKafkaError;

/// Framework whose rebalance reports `running` for `busy_polls` polls after each trigger
fn framework(busy_polls: usize) -> FakeFramework {
    let remaining = Arc::new(AtomicUsize::new(0));
    FakeFramework::start(move |request: &RecordedRequest| {
        let path = request.path.as_str();
        let body = if path == "/api/broker/list" {
            r#"{"brokers":[{"id":"0","active":true,"mem":2048,"cpus":1.0}]}"#.to_string()
        } else if path.starts_with("/api/broker/add") {
            r#"{"brokers":[{"id":"5","active":false}]}"#.to_string()
        } else if path == "/api/broker/rebalance?broker=*" {
            remaining.store(busy_polls, Ordering::SeqCst);
            r#"{"status":"started"}"#.to_string()
        } else if path == "/api/broker/rebalance" {
            let busy = remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            let status = if busy { "running" } else { "idle" };
            format!(r#"{{"status":"{status}","status_code":0,"message":""}}"#)
        } else {
            r#"{"started":true}"#.to_string()
        };
        (200, body)
    })
}

fn controller(framework: &FakeFramework, sleeper: RecordingSleeper) -> BrokerController<HttpTransport, RecordingSleeper> {
    ControllerBuilder::new()
        .url(framework.base_url())
        .build_with_sleeper(sleeper)
        .unwrap()
}

#[test]
fn list_brokers_returns_snapshot() {
    let framework = framework(0);
    let status = controller(&framework, RecordingSleeper::default())
        .list_brokers()
        .unwrap();

    assert_eq!(status.brokers.len(), 1);
    assert_eq!(status.brokers[0].mem, 2048);
}

#[test]
fn rebalance_polls_until_idle_with_five_second_pauses() {
    let framework = framework(2);
    let sleeper = RecordingSleeper::default();

    controller(&framework, sleeper.clone()).rebalance_and_wait().unwrap();

    assert_eq!(
        framework.paths(),
        vec![
            "/api/broker/rebalance?broker=*",
            "/api/broker/rebalance",
            "/api/broker/rebalance",
            "/api/broker/rebalance",
        ]
    );
    assert_eq!(sleeper.pauses(), vec![Duration::from_secs(5), Duration::from_secs(5)]);
}

#[test]
fn create_brokers_sequences_each_broker() {
    let framework = framework(1);
    let sleeper = RecordingSleeper::default();
    let specs = [
        BrokerSpec::new("1").with_cpus(1.5),
        BrokerSpec::new("2").with_mem(4096),
    ];

    controller(&framework, sleeper.clone()).create_brokers(&specs).unwrap();

    let paths = framework.paths();
    assert_eq!(paths.len(), 10);
    assert!(paths[0].starts_with("/api/broker/add?broker=1&"));
    assert!(paths[0].contains("cpus=1.500000"));
    assert_eq!(paths[1], "/api/broker/start?broker=1");
    assert_eq!(paths[2], "/api/broker/rebalance?broker=*");
    assert_eq!(paths[3], "/api/broker/rebalance");
    assert_eq!(paths[4], "/api/broker/rebalance");
    assert!(paths[5].starts_with("/api/broker/add?broker=2&"));
    assert!(paths[5].contains("mem=4096"));
    assert_eq!(paths[6], "/api/broker/start?broker=2");
    assert_eq!(sleeper.pauses().len(), 2);
}

#[test]
fn delete_brokers_stops_then_removes() {
    let framework = framework(0);

    controller(&framework, RecordingSleeper::default())
        .delete_brokers(&["3"])
        .unwrap();

    assert_eq!(
        framework.paths(),
        vec![
            "/api/broker/stop?broker=3",
            "/api/broker/remove?broker=3",
            "/api/broker/rebalance?broker=*",
            "/api/broker/rebalance",
        ]
    );
}

#[test]
fn update_brokers_rejects_bad_id_without_requests() {
    let framework = framework(0);

    let err = controller(&framework, RecordingSleeper::default())
        .update_brokers(&[BrokerSpec::new("abc")])
        .unwrap_err();

    assert!(matches!(err, MesosKafkaError::Parse { .. }));
    assert!(framework.requests().is_empty());
}

#[test]
fn failed_stop_leaves_rest_of_batch_untouched() {
    let framework = FakeFramework::start(|request: &RecordedRequest| {
        if request.path == "/api/broker/stop?broker=1" {
            (500, "broker 1 is not running".to_string())
        } else {
            (200, r#"{"started":true}"#.to_string())
        }
    });

    let err = controller(&framework, RecordingSleeper::default())
        .delete_brokers(&["1", "2"])
        .unwrap_err();

    assert!(err.to_string().contains("broker 1 is not running"));
    assert_eq!(framework.paths(), vec!["/api/broker/stop?broker=1"]);
}
