//! Common test utilities and helpers
//!
//! Shared fixtures and recording fakes for the integration tests.

#![allow(dead_code)]

pub mod mock_services;
pub mod test_fixtures;
