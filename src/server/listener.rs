// Listener module
// Builds the listening socket the accept loop runs on.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create the TCP listener for the serving loop.
///
/// `SO_REUSEADDR` is set so a restart does not trip over a port in
/// TIME_WAIT. `SO_REUSEPORT` is deliberately not set: the port is a
/// singleton resource and a second instance must fail to bind while the
/// first is running.
pub fn bind_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};

    fn loopback(port: u16) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port)
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind_listener(loopback(0)).unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_second_bind_on_same_port_fails() {
        let listener = bind_listener(loopback(0)).unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(bind_listener(addr).is_err());
    }
}
