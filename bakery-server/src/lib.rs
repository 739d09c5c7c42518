//! Bakery Server - storefront backend
//!
//! HTTP/JSON API over SQLite for a bakery: accounts, menu catalogue, orders,
//! contact messages, feedback and prebookings.
//!
//! # Modules
//!
//! - [`core`] - configuration, state, server loop
//! - [`db`] - connection pool, migrations, repositories
//! - [`auth`] - password hashing, JWT, admin guard
//! - [`api`] - route handlers per resource
//! - [`routes`] - router assembly and tower middleware
//! - [`order_money`] - decimal order totals
//! - [`utils`] - logging, JSON extraction, validation

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod order_money;
pub mod routes;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use routes::build_app;
pub use utils::logger::init_logger_with_file;

// Security logging macro - supports tracing field values
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
