//! Common test infrastructure
//!
//! This module provides the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.

mod client;
mod server;

// Public API - this is what tests import
#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use server::{CannedClassifier, TestServer, UnreachableClassifier};
