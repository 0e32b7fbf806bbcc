//! Routing module
//!
//! The fixed route table and its exact-match lookup.

pub mod table;

pub use table::{match_route, CannedResponse};
