//! Test helpers module
//!
//! Shared infrastructure for the integration tests: the mock EventFlow
//! API server, canned wire payloads and a pre-wired service context.

pub mod api_mock;
pub mod test_context;
pub mod test_data;

pub use api_mock::EventFlowMockServer;
pub use test_context::TestContext;
pub use test_data::*;
