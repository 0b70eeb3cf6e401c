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

//! CLI input validators
//!
//! Provides validation for command-line arguments and broker files

use std::collections::HashSet;

use mesos_kafka_client::BrokerSpec;
use mesos_kafka_error::MesosKafkaError;
use mesos_kafka_error::MesosKafkaResult;
use url::Url;

/// Validate the framework API base URL
///
/// # Format
/// `http://host:port` or `https://host:port`
pub fn validate_url(url: &str) -> MesosKafkaResult<()> {
    let parsed = Url::parse(url.trim())
        .map_err(|e| MesosKafkaError::validation_error("url", format!("Invalid URL '{url}': {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(MesosKafkaError::validation_error(
            "url",
            format!("Unsupported scheme '{}', expected http or https", parsed.scheme()),
        ));
    }
    if parsed.host_str().is_none() {
        return Err(MesosKafkaError::validation_error(
            "url",
            format!("URL '{url}' has no host"),
        ));
    }
    Ok(())
}

/// Validate broker ids given on the command line
pub fn validate_broker_ids(ids: &[String]) -> MesosKafkaResult<()> {
    if ids.is_empty() {
        return Err(MesosKafkaError::validation_error(
            "broker_ids",
            "At least one broker id is required",
        ));
    }
    if ids.iter().any(|id| id.trim().is_empty()) {
        return Err(MesosKafkaError::validation_error(
            "broker_ids",
            "Broker id cannot be empty",
        ));
    }
    reject_duplicates(ids.iter().map(String::as_str))
}

/// Validate the brokers of a desired-state file
///
/// Empty ids are allowed; the framework assigns one on add. Ids made only of
/// whitespace are rejected.
pub fn validate_broker_specs(specs: &[BrokerSpec]) -> MesosKafkaResult<()> {
    if specs.is_empty() {
        return Err(MesosKafkaError::validation_error(
            "brokers",
            "Broker file contains no brokers",
        ));
    }
    if specs.iter().any(|spec| !spec.id.is_empty() && spec.id.trim().is_empty()) {
        return Err(MesosKafkaError::validation_error(
            "brokers",
            "Broker id cannot be blank; omit it to let the framework assign one",
        ));
    }
    reject_duplicates(specs.iter().map(|spec| spec.id.as_str()).filter(|id| !id.is_empty()))
}

/// Validate that every broker id is a non-negative integer
pub fn validate_numeric_ids(specs: &[BrokerSpec]) -> MesosKafkaResult<()> {
    for spec in specs {
        spec.id
            .parse::<u32>()
            .map_err(|e| MesosKafkaError::parse(spec.id.clone(), e))?;
    }
    Ok(())
}

fn reject_duplicates<'a>(ids: impl Iterator<Item = &'a str>) -> MesosKafkaResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        let id = id.trim();
        if !seen.insert(id) {
            return Err(MesosKafkaError::validation_error(
                "broker_ids",
                format!("Broker id '{id}' is listed more than once"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        // Valid
        assert!(validate_url("https://mesos-kafka:7000").is_ok());
        assert!(validate_url("http://10.0.0.5:7000/").is_ok());

        // Invalid: empty
        assert!(validate_url("").is_err());

        // Invalid: no scheme
        assert!(validate_url("mesos-kafka:7000").is_err());

        // Invalid: wrong scheme
        assert!(validate_url("ftp://mesos-kafka:7000").is_err());
    }

    #[test]
    fn test_validate_broker_ids() {
        assert!(validate_broker_ids(&["1".to_string(), "2".to_string()]).is_ok());

        // Invalid: empty list
        assert!(validate_broker_ids(&[]).is_err());

        // Invalid: blank id
        assert!(validate_broker_ids(&[" ".to_string()]).is_err());

        // Invalid: duplicate
        let err = validate_broker_ids(&["1".to_string(), " 1".to_string()]).unwrap_err();
        assert!(err.to_string().contains("'1' is listed more than once"));
    }

    #[test]
    fn test_validate_broker_specs() {
        assert!(validate_broker_specs(&[BrokerSpec::new(""), BrokerSpec::new("")]).is_ok());
        assert!(validate_broker_specs(&[BrokerSpec::new("1"), BrokerSpec::new("2")]).is_ok());

        assert!(validate_broker_specs(&[]).is_err());
        assert!(validate_broker_specs(&[BrokerSpec::new("1"), BrokerSpec::new("1")]).is_err());

        // Invalid: whitespace-only id
        let err = validate_broker_specs(&[BrokerSpec::new(" ")]).unwrap_err();
        assert!(err.to_string().contains("cannot be blank"));
    }

    #[test]
    fn test_validate_numeric_ids() {
        assert!(validate_numeric_ids(&[BrokerSpec::new("0"), BrokerSpec::new("12")]).is_ok());

        let err = validate_numeric_ids(&[BrokerSpec::new("1"), BrokerSpec::new("b2")]).unwrap_err();
        assert!(matches!(err, MesosKafkaError::Parse { ref id, .. } if id == "b2"));

        assert!(validate_numeric_ids(&[BrokerSpec::new("-1")]).is_err());
    }
}
