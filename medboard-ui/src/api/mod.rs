//! API client module
//!
//! [`types`] mirrors the server's wire shapes; [`client`] holds the HTTP
//! functions the pages call.

pub mod client;
pub mod types;

pub use client::*;
