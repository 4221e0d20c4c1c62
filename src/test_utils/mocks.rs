//! Mock servers for AiSEG2 (mockito) and InfluxDB (wiremock).

use crate::aiseg::query_builder::circuit_total_path;
use crate::test_utils::html::{create_settings_html, create_val_kwh_html};
use mockito::{Mock, Server, ServerGuard};
use wiremock::matchers::{method, path};
use wiremock::{Mock as WireMock, MockServer, ResponseTemplate};

/// A running AiSEG2 mock together with the mocks registered on it.
pub struct MockAiseg2Server {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl MockAiseg2Server {
    /// The `host:port` to put in `AISEG2_HOST`.
    pub fn host_with_port(&self) -> String {
        self.server.host_with_port()
    }

    /// Number of registered mocks that have been requested at least once.
    pub fn matched_count(&self) -> usize {
        self.mocks.iter().filter(|mock| mock.matched()).count()
    }
}

/// Builder for creating mockito server mocks for AiSEG2 endpoints.
pub struct MockAiseg2ServerBuilder {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl MockAiseg2ServerBuilder {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Serves `body` on `path` (which may carry a query string).
    pub async fn mock_page(mut self, path: &str, body: impl Into<String>) -> Self {
        let mock = self
            .server
            .mock("GET", path)
            .with_status(200)
            .with_body(body.into())
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    /// Serves `body` on `path`, expecting exactly `hits` requests.
    pub async fn mock_page_expect(mut self, path: &str, body: impl Into<String>, hits: usize) -> Self {
        let mock = self
            .server
            .mock("GET", path)
            .with_status(200)
            .with_body(body.into())
            .expect(hits)
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    pub async fn mock_power_flow(self, body: impl Into<String>) -> Self {
        self.mock_page("/page/electricflow/111", body).await
    }

    pub async fn mock_device_list_page(self, page: usize, body: impl Into<String>) -> Self {
        self.mock_page(&format!("/page/electricflow/1113?id={}", page), body)
            .await
    }

    /// Serves the four report pages in the order generation, sold,
    /// purchased, usage.
    pub async fn mock_report_pages(self, values: [&str; 4]) -> Self {
        let [generation, sold, purchased, usage] = values;
        self.mock_page("/page/graph/51111", create_val_kwh_html(generation))
            .await
            .mock_page("/page/graph/54111", create_val_kwh_html(sold))
            .await
            .mock_page("/page/graph/53111", create_val_kwh_html(purchased))
            .await
            .mock_page("/page/graph/52111", create_val_kwh_html(usage))
            .await
    }

    /// Serves the circuit settings page with `script` as its onload script.
    pub async fn mock_settings(self, script: &str) -> Self {
        self.mock_page("/page/setting/installation/734", create_settings_html(script))
            .await
    }

    pub async fn mock_circuit_total(self, circuit_id: &str, value: &str) -> Self {
        self.mock_page(
            &circuit_total_path(circuit_id),
            create_val_kwh_html(value),
        )
        .await
    }

    pub async fn mock_error(mut self, path: &str, status: usize, body: &str) -> Self {
        let mock = self
            .server
            .mock("GET", path)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    pub fn build(self) -> MockAiseg2Server {
        MockAiseg2Server {
            server: self.server,
            mocks: self.mocks,
        }
    }
}

/// Builder for creating wiremock server mocks for InfluxDB endpoints.
pub struct MockInfluxServerBuilder {
    server: MockServer,
}

impl MockInfluxServerBuilder {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub async fn mock_write_success(self) -> Self {
        WireMock::given(method("POST"))
            .and(path("/api/v2/write"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
        self
    }

    pub async fn mock_write_error(self, status: u16, message: &str) -> Self {
        WireMock::given(method("POST"))
            .and(path("/api/v2/write"))
            .respond_with(ResponseTemplate::new(status).set_body_string(message))
            .mount(&self.server)
            .await;
        self
    }

    /// Mocks a successful write that must be called exactly `times` times.
    pub async fn mock_write_with_expectation(self, times: u64) -> Self {
        WireMock::given(method("POST"))
            .and(path("/api/v2/write"))
            .respond_with(ResponseTemplate::new(204))
            .expect(times)
            .mount(&self.server)
            .await;
        self
    }

    pub fn build(self) -> MockServer {
        self.server
    }
}

/// Error bodies in the shape InfluxDB returns them.
pub mod responses {
    pub fn error_response(code: &str, message: &str) -> String {
        format!(r#"{{"code":"{}","message":"{}"}}"#, code, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_aiseg2_server_builder() {
        let server = MockAiseg2ServerBuilder::new()
            .await
            .mock_power_flow("<html></html>")
            .await
            .build();

        assert!(!server.host_with_port().is_empty());
        assert_eq!(server.matched_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_influx_server_builder() {
        let server = MockInfluxServerBuilder::new()
            .await
            .mock_write_success()
            .await
            .build();

        assert!(server.uri().starts_with("http://"));
    }

    #[test]
    fn test_error_response() {
        let error = responses::error_response("unauthorized", "unauthorized access");
        assert_eq!(
            error,
            r#"{"code":"unauthorized","message":"unauthorized access"}"#
        );
    }
}
