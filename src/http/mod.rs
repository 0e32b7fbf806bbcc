//! HTTP protocol layer module
//!
//! Response construction, decoupled from routing decisions.

pub mod response;

pub use response::build_canned_response;
