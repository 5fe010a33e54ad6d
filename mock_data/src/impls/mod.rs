//! `MockData` implementations for types the derive cannot see into.
//!
//! The values agree with the builtin table used by `#[derive(MockData)]`, so
//! a `bool` reached through `<bool as MockData>::mock_data()` is the same
//! `false` the derive would have written inline.

mod containers;
mod crates;
mod scalars;
mod time;
