//! Mock HTTP server setup for integration tests

use deepgram_manage::Deepgram;
use mockito::{Mock, Server, ServerGuard};

pub const TEST_API_KEY: &str = "test-key";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Create a test client pointed at the mock server via the builder's
    /// base URL override.
    pub fn client(&self) -> Deepgram {
        Deepgram::builder()
            .api_key(TEST_API_KEY)
            .base_url(&self.base_url)
            .build()
            .expect("failed to build test client")
    }

    /// Mock a JSON response for the given method and path.
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
