//! repokit core - pure domain logic with no I/O
//!
//! This crate holds the domain types, the error enum and the ports
//! (interfaces) shared by the `fix-syntax` and `pick-port` tools. It never
//! touches the filesystem or the network - those live in the adapters of
//! the `repokit` crate.

pub mod app;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
