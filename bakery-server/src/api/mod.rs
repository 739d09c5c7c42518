//! HTTP API
//!
//! Each resource exposes `router()` for its public routes and, where it has
//! any, `admin_router()` for its `/api/admin/*` routes.

pub mod auth;
pub mod contact;
pub mod feedback;
pub mod health;
pub mod menu;
pub mod orders;
pub mod prebookings;
