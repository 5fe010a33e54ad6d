//! Core crate for the `MockData` fixture generator.
//!
//! This crate defines the [`MockData`] trait, placeholder helpers for
//! URL-like and identifier types, and implementations for common
//! standard-library and third-party types. The derive macro itself lives in the companion
//! `mock_data_macros` crate and is re-exported here.
//!
//! ```rust
//! use mock_data::MockData;
//!
//! #[derive(Debug, MockData)]
//! enum BookCategory {
//!     Thriller,
//!     Fantasy,
//! }
//!
//! #[derive(Debug, MockData)]
//! struct Book {
//!     title: String,
//!     subtitle: Option<String>,
//!     number_of_pages: u32,
//!     category: BookCategory,
//! }
//!
//! let book = Book::mock_data_with(BookMockOverrides {
//!     title: Some("Dune".to_owned()),
//!     ..Default::default()
//! });
//! assert_eq!(book.title, "Dune");
//! assert_eq!(book.subtitle, None);
//! assert_eq!(book.number_of_pages, 0);
//! assert!(matches!(book.category, BookCategory::Thriller));
//! ```

pub use mock_data_macros::MockData;

mod impls;
pub mod placeholder;

/// Types that can build a fully-populated placeholder instance of
/// themselves without any input.
///
/// `#[derive(MockData)]` implements this for structs and enums. Fields whose
/// type is not a recognised builtin are filled through this trait, so every
/// such field type must implement it too.
pub trait MockData: Sized {
    /// Build a placeholder value.
    ///
    /// For derived structs every field receives its generated default; for
    /// derived enums the first declared variant is returned.
    #[must_use]
    fn mock_data() -> Self;

    /// Build `count` independent placeholder values.
    ///
    /// Each value comes from a separate [`MockData::mock_data`] call, so
    /// time-based and identifier fields differ between elements.
    #[must_use]
    fn mock_many(count: usize) -> Vec<Self> {
        tracing::debug!(
            type_name = std::any::type_name::<Self>(),
            count,
            "building mock values"
        );
        std::iter::repeat_with(Self::mock_data).take(count).collect()
    }
}
