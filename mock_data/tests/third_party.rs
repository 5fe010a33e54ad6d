//! Derived factories for fields of feature-gated third-party types.
//!
//! `Url`, `Uri`, and `Uuid` fields are filled through the runtime's
//! `MockData` impls, so they need the matching cargo features.
#![cfg(all(feature = "url", feature = "http", feature = "uuid"))]

use anyhow::{Result, ensure};
use mock_data::MockData;
use mock_data::placeholder::PLACEHOLDER_URL;
use rstest::rstest;

#[derive(Debug, MockData)]
struct Endpoint {
    target: http::Uri,
    docs: url::Url,
    id: uuid::Uuid,
}

#[rstest]
fn uri_field_uses_the_placeholder_address() -> Result<()> {
    let endpoint = Endpoint::mock_data();
    ensure!(
        endpoint.target.scheme_str() == Some("https"),
        "unexpected scheme in {}",
        endpoint.target
    );
    ensure!(
        endpoint.target.host() == Some("www.example.com"),
        "unexpected host in {}",
        endpoint.target
    );
    ensure!(
        endpoint.docs.as_str() == PLACEHOLDER_URL,
        "unexpected url {}",
        endpoint.docs
    );
    Ok(())
}

#[rstest]
fn overriding_the_uri_keeps_the_other_defaults() -> Result<()> {
    let endpoint = Endpoint::mock_data_with(EndpointMockOverrides {
        target: Some(http::Uri::from_static("http://localhost:8080/health")),
        ..Default::default()
    });
    ensure!(
        endpoint.target.port_u16() == Some(8080),
        "override lost: {}",
        endpoint.target
    );
    ensure!(
        endpoint.id != Endpoint::mock_data().id,
        "identifiers should be fresh per call"
    );
    Ok(())
}
