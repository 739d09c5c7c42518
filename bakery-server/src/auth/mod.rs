//! Authentication: password hashing, JWT issuance and the admin guard

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::require_admin;
pub use password::{hash_password, verify_password};
