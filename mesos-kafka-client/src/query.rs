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

//! Query-string encoding for broker add/update requests
//!
//! Numeric fields that are absent or zero and failover fields that are absent
//! or empty are left out entirely, so the framework falls back to its own
//! defaults. Option strings are always sent, even when empty. Keys are emitted
//! in sorted order.

use std::collections::BTreeMap;

use crate::model::BrokerSpec;

pub const BROKER: &str = "broker";
pub const CPUS: &str = "cpus";
pub const MEM: &str = "mem";
pub const HEAP: &str = "heap";
pub const JVM_OPTIONS: &str = "jvmOptions";
pub const LOG4J_OPTIONS: &str = "log4jOptions";
pub const OPTIONS: &str = "options";
pub const CONSTRAINTS: &str = "constraints";
pub const FAILOVER_DELAY: &str = "failoverDelay";
pub const FAILOVER_MAX_DELAY: &str = "failoverMaxDelay";
pub const FAILOVER_MAX_TRIES: &str = "failoverMaxTries";

/// Key/value pairs sent for `spec`
pub fn broker_params(spec: &BrokerSpec) -> BTreeMap<&'static str, String> {
    let mut params = BTreeMap::new();
    params.insert(BROKER, spec.id.clone());

    if let Some(cpus) = spec.cpus.filter(|cpus| *cpus != 0.0) {
        params.insert(CPUS, format!("{cpus:.6}"));
    }
    if let Some(mem) = spec.mem.filter(|mem| *mem != 0) {
        params.insert(MEM, mem.to_string());
    }
    if let Some(heap) = spec.heap.filter(|heap| *heap != 0) {
        params.insert(HEAP, heap.to_string());
    }

    params.insert(JVM_OPTIONS, spec.jvm_options.clone());
    params.insert(LOG4J_OPTIONS, spec.log4j_options.clone());
    params.insert(OPTIONS, spec.options.clone());
    params.insert(CONSTRAINTS, spec.constraints.clone());

    let failover = &spec.failover;
    if let Some(delay) = failover.delay.as_deref().filter(|delay| !delay.is_empty()) {
        params.insert(FAILOVER_DELAY, delay.to_string());
    }
    if let Some(max_delay) = failover.max_delay.as_deref().filter(|max_delay| !max_delay.is_empty()) {
        params.insert(FAILOVER_MAX_DELAY, max_delay.to_string());
    }
    if let Some(max_tries) = failover.max_tries.filter(|max_tries| *max_tries != 0) {
        params.insert(FAILOVER_MAX_TRIES, max_tries.to_string());
    }

    params
}

/// Sparse, form-urlencoded query string for add/update requests
pub fn encode_broker_query(spec: &BrokerSpec) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(broker_params(spec))
        .finish()
}

/// `broker=<id>` query string for start/stop/remove requests
pub fn encode_broker_id(id: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(BROKER, id)
        .finish()
}
