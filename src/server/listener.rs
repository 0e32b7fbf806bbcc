// Listener module
// Creates the TCP listener the accept loop runs on.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a `TcpListener` bound to `addr` with the given accept backlog.
///
/// Bind failures (port in use, permission denied) surface as the returned
/// error; the partially created socket is released on drop.
pub fn create_listener(addr: std::net::SocketAddr, backlog: i32) -> std::io::Result<TcpListener> {
    // Create socket with appropriate domain (IPv4 or IPv6)
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Allow rebinding to a port still in TIME_WAIT from a previous run
    socket.set_reuse_address(true)?;

    // Non-blocking mode for the async runtime
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(backlog)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio's
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
