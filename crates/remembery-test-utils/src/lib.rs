//! Test helpers shared across Remembery crates.

pub mod kv;

pub use kv::{StubFailure, StubKv};
