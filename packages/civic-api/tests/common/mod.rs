// Common test utilities

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use civic_api::testing::MockTransport;
use civic_api::{ApiConfig, ApiDispatcher, CivicClient, MockContext};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

pub const TEST_BASE_URL: &str = "http://backend.test/api/";

/// Client wired to a recording transport and a deterministic mock context.
pub struct TestHarness {
    pub transport: Arc<MockTransport>,
    pub dispatcher: ApiDispatcher,
    pub client: CivicClient,
}

impl TestHarness {
    pub fn with(config: ApiConfig, transport: MockTransport, mocks: MockContext) -> Self {
        let transport = Arc::new(transport);
        let dispatcher = ApiDispatcher::new(config, transport.clone());
        let client = CivicClient::new(dispatcher.clone(), mocks);
        Self {
            transport,
            dispatcher,
            client,
        }
    }

    /// Mocks on. A base URL is configured anyway so a stray network call
    /// would be observable.
    pub fn mocked() -> Self {
        Self::with(
            ApiConfig::mocked().with_base_url(TEST_BASE_URL),
            MockTransport::new(),
            MockContext::deterministic(42),
        )
    }

    /// Mocks off, backend reachable through `transport`.
    pub fn remote(transport: MockTransport) -> Self {
        Self::with(
            ApiConfig::remote(TEST_BASE_URL),
            transport,
            MockContext::deterministic(42),
        )
    }

    /// Mocks off, fallback disabled for every call.
    pub fn strict(transport: MockTransport) -> Self {
        let transport = Arc::new(transport);
        let dispatcher =
            ApiDispatcher::new(ApiConfig::remote(TEST_BASE_URL), transport.clone()).strict();
        let client = CivicClient::new(dispatcher.clone(), MockContext::deterministic(42));
        Self {
            transport,
            dispatcher,
            client,
        }
    }

    /// Mocks off and no backend configured.
    pub fn without_base_url() -> Self {
        Self::with(
            ApiConfig::mocked().with_use_mocks(false),
            MockTransport::new(),
            MockContext::deterministic(42),
        )
    }

    pub fn network_calls(&self) -> usize {
        self.transport.call_count()
    }
}

/// Collects formatted log output so tests can assert on diagnostics.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Route this thread's events (WARN and above) into the buffer until
    /// the guard drops. `#[tokio::test]` runs on one thread, so awaits stay covered.
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
