//! Infrastructure layer for external integrations.
//!
//! Implements the domain's repository traits against real services.
//!
//! # Modules
//!
//! - [`http`] - HTTP/JSON client for the remote artwork listing

pub mod http;
