//! Placeholder values for feature-gated third-party types.
//!
//! The `MockData` impls for URLs, URIs, and unique identifiers build their
//! values here, so derived fields of those types reach these helpers through
//! `<T as MockData>::mock_data()`. Each helper exists only when its cargo
//! feature is enabled. Every helper is infallible and returns a fresh value
//! on each call.

/// Address used for every generated URL and URI.
pub const PLACEHOLDER_URL: &str = "https://www.example.com/";

#[cfg(feature = "url")]
static PARSED_URL: std::sync::LazyLock<url::Url> = std::sync::LazyLock::new(parse_placeholder_url);

#[cfg(feature = "url")]
#[expect(
    clippy::expect_used,
    reason = "PLACEHOLDER_URL is a constant absolute URL covered by unit tests"
)]
fn parse_placeholder_url() -> url::Url {
    tracing::trace!(url = PLACEHOLDER_URL, "parsing placeholder URL");
    url::Url::parse(PLACEHOLDER_URL).expect("placeholder URL must parse")
}

/// Returns [`PLACEHOLDER_URL`] as a [`url::Url`].
#[cfg(feature = "url")]
#[must_use]
pub fn url() -> url::Url {
    PARSED_URL.clone()
}

/// Returns [`PLACEHOLDER_URL`] as an [`http::Uri`].
#[cfg(feature = "http")]
#[must_use]
pub fn uri() -> http::Uri {
    http::Uri::from_static(PLACEHOLDER_URL)
}

/// Returns a freshly generated random (version 4) [`uuid::Uuid`].
#[cfg(feature = "uuid")]
#[must_use]
pub fn uuid() -> uuid::Uuid {
    uuid::Uuid::new_v4()
}
