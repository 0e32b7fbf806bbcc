// Connection handling module
// Serves a single accepted TCP connection for exactly one exchange.

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Accept a connection: log it and hand it to a spawned serving task.
pub fn accept_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, cfg: &Arc<Config>) {
    if cfg.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    handle_connection(stream, peer_addr, Arc::clone(cfg));
}

/// Serve one HTTP/1.1 request/response cycle, then close the connection.
///
/// Keep-alive is disabled: the connection is torn down after the response is
/// written, regardless of what the client asked for. Errors while serving
/// (malformed request, write failure) are logged and end the connection; no
/// response is guaranteed to have been sent in that case.
fn handle_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, cfg: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(false).serve_connection(
            io,
            service_fn(move |req| {
                let cfg = Arc::clone(&cfg);
                async move { handler::handle_request(req, cfg, peer_addr).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
