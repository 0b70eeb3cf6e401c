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

//! Unified error system for the Mesos Kafka broker controller
//!
//! Every fallible operation of the controller and the admin tools returns
//! [`MesosKafkaResult`]. Transport failures keep their own enum so callers can
//! inspect the HTTP status and body the remote API returned.

mod transport;

use std::io;
use std::num::ParseIntError;

use thiserror::Error;
pub use transport::TransportError;

/// Main error type for all broker controller operations
///
/// # Examples
///
/// ```rust
/// use mesos_kafka_error::MesosKafkaError;
/// use mesos_kafka_error::TransportError;
///
/// let err: MesosKafkaError = TransportError::unexpected_status("https://mesos:7000/api/broker/list", 500, "boom").into();
/// assert!(err.is_transport());
/// ```
#[derive(Debug, Error)]
pub enum MesosKafkaError {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// Network failure or non-2xx response
    #[error(transparent)]
    Transport(#[from] TransportError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    /// Response payload did not match the expected JSON schema
    #[error("Failed to decode response of '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ============================================================================
    // Framework Errors
    // ============================================================================
    /// The framework answered but explicitly refused the action
    #[error("Framework refused to {operation} broker '{broker}'")]
    Rejected { operation: &'static str, broker: String },

    // ============================================================================
    // Caller Input Errors
    // ============================================================================
    /// Broker identifier is not a valid numeric id
    #[error("Invalid broker id '{id}': {source}")]
    Parse {
        id: String,
        #[source]
        source: ParseIntError,
    },

    /// Caller-supplied field failed validation
    #[error("Validation failed for '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// Desired-state file could not be parsed
    #[error("Invalid broker file '{path}': {reason}")]
    InvalidBrokerFile { path: String, reason: String },

    // ============================================================================
    // Rebalance Errors
    // ============================================================================
    /// The rebalance status endpoint kept failing while waiting for `idle`
    #[error("Rebalance status unavailable after {attempts} consecutive failed polls: {source}")]
    RebalanceStalled {
        attempts: u32,
        #[source]
        source: Box<MesosKafkaError>,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Configuration could not be loaded or deserialized
    #[error("Configuration parse error: {reason}")]
    ConfigParseFailed { reason: String },

    /// Invalid configuration value
    #[error("Invalid configuration for '{key}': value='{value}', reason={reason}")]
    ConfigInvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    // ============================================================================
    // System Errors
    // ============================================================================
    /// IO error from std::io
    #[error("IO error: {0}")]
    IO(#[from] io::Error),
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl MesosKafkaError {
    /// Create a decode error for the response of `path`
    #[inline]
    pub fn decode(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Create an error for an action the framework acknowledged with `started: false`
    #[inline]
    pub fn rejected(operation: &'static str, broker: impl Into<String>) -> Self {
        Self::Rejected {
            operation,
            broker: broker.into(),
        }
    }

    /// Create a broker id parse error
    #[inline]
    pub fn parse(id: impl Into<String>, source: ParseIntError) -> Self {
        Self::Parse { id: id.into(), source }
    }

    /// Create a validation error
    #[inline]
    pub fn validation_error(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn invalid_broker_file(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBrokerFile {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wrap the last polling failure once the failure budget is spent
    #[inline]
    pub fn rebalance_stalled(attempts: u32, last: MesosKafkaError) -> Self {
        Self::RebalanceStalled {
            attempts,
            source: Box::new(last),
        }
    }

    #[inline]
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed { reason: reason.into() }
    }

    #[inline]
    pub fn config_invalid_value(key: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigInvalidValue {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

// ============================================================================
// Type Aliases
// ============================================================================

/// Result type alias for broker controller operations
pub type MesosKafkaResult<T> = std::result::Result<T, MesosKafkaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_conversion() {
        let err: MesosKafkaError = TransportError::unexpected_status("https://m:7000/api/broker/stop", 400, "").into();
        assert!(err.is_transport());
        assert!(!err.is_decode());
    }

    #[test]
    fn test_decode_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MesosKafkaError::decode("/api/broker/list", source);
        assert!(err.is_decode());
        assert!(err.to_string().starts_with("Failed to decode response of '/api/broker/list'"));
    }

    #[test]
    fn test_parse_error() {
        let source = "abc".parse::<u32>().unwrap_err();
        let err = MesosKafkaError::parse("abc", source);
        assert!(err.to_string().contains("Invalid broker id 'abc'"));
    }

    #[test]
    fn test_rejected() {
        let err = MesosKafkaError::rejected("start", "3");
        assert_eq!(err.to_string(), "Framework refused to start broker '3'");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_invalid_broker_file() {
        let err = MesosKafkaError::invalid_broker_file("brokers.yaml", "missing field `brokers`");
        assert_eq!(
            err.to_string(),
            "Invalid broker file 'brokers.yaml': missing field `brokers`"
        );
    }

    #[test]
    fn test_rebalance_stalled_chains_last_error() {
        let last = MesosKafkaError::from(TransportError::unexpected_status("u", 502, "bad gateway"));
        let err = MesosKafkaError::rebalance_stalled(3, last);
        assert!(err.to_string().contains("3 consecutive failed polls"));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("502"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: MesosKafkaError = io_err.into();
        assert!(matches!(err, MesosKafkaError::IO(_)));
    }
}
