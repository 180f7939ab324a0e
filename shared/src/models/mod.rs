//! Data models
//!
//! Shared between open-server and its API clients.

pub mod restaurant;

pub use restaurant::*;
