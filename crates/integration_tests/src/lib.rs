//! Contract verification for the adaptor's settings endpoint.
//!
//! The scenarios live in `tests/settings_contract.rs`. This library holds the
//! assertion helpers they share, so a failing case reports the full response
//! rather than a bare status mismatch.

pub mod assertions;

pub use assertions::{assert_header, assert_response};

// Re-export test_utils so scenarios need a single import path
pub use test_utils::{SettingsClient, SettingsResponse, TestConfig, TestContext, fixtures};
