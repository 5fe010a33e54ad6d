//! Implementations for optional third-party types.
//!
//! Each is gated on the cargo feature of the same name and delegates to
//! [`crate::placeholder`].

#[cfg(any(feature = "url", feature = "http", feature = "uuid"))]
use crate::{MockData, placeholder};

#[cfg(feature = "url")]
impl MockData for url::Url {
    fn mock_data() -> Self {
        placeholder::url()
    }
}

#[cfg(feature = "http")]
impl MockData for http::Uri {
    fn mock_data() -> Self {
        placeholder::uri()
    }
}

#[cfg(feature = "uuid")]
impl MockData for uuid::Uuid {
    fn mock_data() -> Self {
        placeholder::uuid()
    }
}
