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

//! Transport errors raised while talking to the broker-management REST API

use thiserror::Error;

/// HTTP transport errors
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (connect, TLS, timeout, body read)
    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The remote side answered with a status outside [200, 300)
    #[error("Request to {url} returned HTTP status {status}, body: {body}")]
    UnexpectedStatus { url: String, status: u16, body: String },

    /// The base URL or an endpoint path could not be parsed
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl TransportError {
    #[inline]
    pub fn request_failed(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::RequestFailed {
            url: url.into(),
            source: source.into(),
        }
    }

    #[inline]
    pub fn unexpected_status(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    #[inline]
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// The URL the failed request targeted
    pub fn url(&self) -> &str {
        match self {
            Self::RequestFailed { url, .. } | Self::UnexpectedStatus { url, .. } | Self::InvalidUrl { url, .. } => url,
        }
    }

    /// HTTP status, when the remote side answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let err = TransportError::unexpected_status("https://mesos:7000/api/broker/list", 503, "busy");
        assert_eq!(
            err.to_string(),
            "Request to https://mesos:7000/api/broker/list returned HTTP status 503, body: busy"
        );
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.url(), "https://mesos:7000/api/broker/list");
    }

    #[test]
    fn test_request_failed_keeps_source() {
        let err = TransportError::request_failed(
            "https://mesos:7000/api/broker/list",
            io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
        );
        assert!(err.to_string().contains("connection refused"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_invalid_url() {
        let err = TransportError::invalid_url("not a url", "relative URL without a base");
        assert_eq!(err.to_string(), "Invalid URL 'not a url': relative URL without a base");
    }
}
