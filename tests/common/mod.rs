//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Mock backend helpers built on wiremock
//! - An in-memory search backend with scripted latencies
//! - Sample data


// Re-export commonly used utilities
pub use fake_search::*;
pub use mock_backend::*;
