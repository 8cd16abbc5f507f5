//! Tests for the DataObject derive macro
//!
//! Expansion is checked on the generated token text; behavior of the
//! generated code is covered by the main crate's `tests/derive_test.rs`.
