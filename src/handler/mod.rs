//! Request handler module
//!
//! Turns a parsed request into its canned response.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
