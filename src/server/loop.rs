// Server loop module
// Accepts connections and hands each one to the connection handler.

use std::sync::Arc;

use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::Config;
use crate::logger;

/// Accept loop. Runs on the calling task until the process is terminated.
///
/// Accept errors are logged and do not stop the listener; each connection
/// attempt is independent.
pub async fn run_accept_loop(
    listener: TcpListener,
    cfg: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                accept_connection(stream, peer_addr, &cfg);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
