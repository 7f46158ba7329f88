//! Shared test utilities for bidquiz
//!
//! - Quiz, deal and check fixtures
//! - A local quiz service built on axum
//! - TUI terminal testing helpers

#![allow(dead_code)]

pub mod fixtures;
pub mod server;
pub mod terminal;
