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

//! JSON-over-HTTP transport for the broker-management API
//!
//! Paths (with their query string) are resolved against a base URL. Any status
//! outside [200, 300) becomes [`TransportError::UnexpectedStatus`] carrying the
//! response body. This layer never retries.

use std::time::Duration;

use bytes::Bytes;
use mesos_kafka_error::TransportError;
use reqwest::blocking::Client;
use reqwest::blocking::RequestBuilder;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

/// Raw request/response contract used by the broker controller
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    fn get_json(&self, path: &str) -> Result<Bytes, TransportError>;

    fn put_json(&self, path: &str, body: Bytes) -> Result<Bytes, TransportError>;

    fn delete_json(&self, path: &str) -> Result<Bytes, TransportError>;
}

/// Blocking HTTP transport holding one reusable connection pool
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: Url,
    client: Client,
}

impl HttpTransport {
    /// Transport for a base URL such as `https://mesos-kafka:7000`
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, None)
    }

    /// Transport for `https://{hostname}:{port}`
    pub fn for_host(hostname: &str, port: u16) -> Result<Self, TransportError> {
        Self::new(&format!("https://{hostname}:{port}"))
    }

    /// Transport with an optional per-request timeout
    ///
    /// Without a timeout the reqwest default applies.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let parsed = Url::parse(base_url).map_err(|e| TransportError::invalid_url(base_url, e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(TransportError::invalid_url(base_url, "URL cannot be used as a base"));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::request_failed(base_url, e))?;

        Ok(Self {
            base_url: parsed,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn full_url(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::invalid_url(path, e.to_string()))
    }

    fn execute(&self, url: Url, request: RequestBuilder) -> Result<Bytes, TransportError> {
        let response = request
            .send()
            .map_err(|e| TransportError::request_failed(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TransportError::unexpected_status(url.as_str(), status.as_u16(), body));
        }

        response
            .bytes()
            .map_err(|e| TransportError::request_failed(url.as_str(), e))
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, path: &str) -> Result<Bytes, TransportError> {
        let url = self.full_url(path)?;
        debug!("GET {url}");
        let request = self.client.get(url.clone());
        self.execute(url, request)
    }

    fn put_json(&self, path: &str, body: Bytes) -> Result<Bytes, TransportError> {
        let url = self.full_url(path)?;
        debug!("PUT {url} ({} bytes)", body.len());
        let request = self
            .client
            .put(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.execute(url, request)
    }

    fn delete_json(&self, path: &str) -> Result<Bytes, TransportError> {
        let url = self.full_url(path)?;
        debug!("DELETE {url}");
        let request = self.client.delete(url.clone());
        self.execute(url, request)
    }
}
