//! Adapters implementing the core ports against the filesystem, `syn`,
//! `rustfmt` and the OS socket table.

pub mod discovery;
pub mod parser;
pub mod rustfmt;
pub mod tcp;
