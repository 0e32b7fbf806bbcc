//! Logger module
//!
//! Connection-level logging for the server: info and access lines go to
//! stdout, warnings and errors to stderr. There is no file logging and no
//! level filtering beyond that split.

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Test server started successfully");
    println!("Listening on: http://{addr}");
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Access log format: {}", config.logging.access_log_format);
    println!("Connections close after every response");
    println!("======================================");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}
