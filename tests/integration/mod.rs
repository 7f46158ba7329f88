//! Integration tests for bidquiz
//!
//! These tests drive the state machines through the session driver, the HTTP
//! client against a local server, and the terminal front end.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod history_flow;
pub mod http_client;
pub mod quiz_flow;
pub mod rendering;
