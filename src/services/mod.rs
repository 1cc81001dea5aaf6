pub mod port_service;
pub mod syntax_service;
