//! Common test utilities for Slotwise scenario and CLI tests.
//!
//! - `TestEnv`: isolated working directory and config home
//! - `assert_output_contains!`

pub mod assertions;
pub mod env;

pub use env::TestEnv;
