//! Local static file server.
//!
//! Serves the current working directory over plain HTTP on a fixed port,
//! sequentially (one connection at a time), until an interrupt signal
//! requests a graceful stop.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
