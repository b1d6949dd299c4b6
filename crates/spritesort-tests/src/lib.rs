//! SpriteSort End-to-End Test Infrastructure
//!
//! Shared fixtures and a small harness for driving the CLI commands against
//! files in a temporary directory.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p spritesort-tests
//! ```

pub mod fixtures;
pub mod harness;
