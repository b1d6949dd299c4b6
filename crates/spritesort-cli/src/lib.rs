//! SpriteSort CLI library.
//!
//! This crate provides the configuration layer and command implementations
//! behind the `spritesort` binary.

pub mod commands;
pub mod config;
