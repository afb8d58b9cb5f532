//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every wrapper built here records calls instead of touching the network
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use ceph_client::testing::{RecordedRequest, RecordingTransport, load_fixture};
#[allow(unused_imports)]
pub use ceph_client::{BodyType, Capabilities, CephWrapper, ClientError, HttpMethod};

/// A wrapper over a fresh [`RecordingTransport`].
#[allow(dead_code)]
pub fn recording_wrapper() -> CephWrapper<RecordingTransport> {
    CephWrapper::new(RecordingTransport::new())
}

/// The single request recorded so far.
///
/// # Panics
/// If zero or more than one request was recorded.
#[allow(dead_code)]
pub fn only_request(ceph: &CephWrapper<RecordingTransport>) -> RecordedRequest {
    let requests = ceph.transport().requests();
    assert_eq!(requests.len(), 1, "expected exactly one transport call");
    requests.into_iter().next().expect("one request")
}

/// Capability map used across the auth tests.
#[allow(dead_code)]
pub fn admin_caps() -> Capabilities {
    Capabilities::new()
        .with("mon", "allow rwx")
        .with("osd", "allow *")
}
