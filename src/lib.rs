//! repokit application library
//!
//! Shared code behind the `fix-syntax` and `pick-port` binaries, exposed as
//! a library for testing.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod logging;
pub mod services;
