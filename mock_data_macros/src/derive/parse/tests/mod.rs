//! Tests for `#[mock_data(...)]` parsing behaviour.
