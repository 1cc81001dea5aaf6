use repokit_core::ports::PortProbe;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener};
use tracing::debug;

/// Bind and immediately release `host:port`. Any bind error means in use.
pub fn is_port_free(port: u16, host: IpAddr) -> bool {
    match TcpListener::bind(SocketAddr::new(host, port)) {
        // Listener is dropped here, releasing the port
        Ok(_listener) => true,
        Err(err) => {
            debug!(port, %host, "Port unavailable: {}", err);
            false
        }
    }
}

/// Port availability backed by the OS socket table
#[derive(Debug, Clone, Copy)]
pub struct TcpProbe {
    host: IpAddr,
}

impl TcpProbe {
    pub fn new(host: IpAddr) -> Self {
        Self { host }
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
    }
}

impl PortProbe for TcpProbe {
    fn is_free(&self, port: u16) -> bool {
        is_port_free(port, self.host)
    }
}
