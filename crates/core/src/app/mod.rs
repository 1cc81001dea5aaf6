pub mod port_search;

pub use port_search::*;
