//! Core server plumbing: configuration, state and the HTTP server loop

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
