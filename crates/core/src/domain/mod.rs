pub mod port;
pub mod report;

// Re-exports for convenience
pub use port::*;
pub use report::*;
