//! Job listing HTTP server
//!
//! Upload/download shell around [`crate::pipeline::process_upload`].
//! Run with `joblist-server`.

pub mod handlers;
pub mod server;

pub use server::{create_router, run_api_server, ApiConfig};
