//! Shared helpers for integration tests: fixture loading and an in-memory
//! search client double.

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_client;
pub mod strategies;

pub use fixtures::*;
pub use mock_client::*;
