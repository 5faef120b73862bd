//! Integration tests module
//!
//! Client bootstrap tests run anywhere. Tests against a live Rook cluster are
//! marked with #[ignore]; run them with: cargo test --test integration -- --ignored

#[path = "../common/mod.rs"]
mod common;
