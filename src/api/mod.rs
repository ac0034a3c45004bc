//! HTTP API: routing, request handlers, and error mapping.

pub mod error;
pub mod handlers;
pub mod routes;
