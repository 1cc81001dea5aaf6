pub mod formatter;
pub mod probe;

// Re-exports
pub use formatter::*;
pub use probe::*;
