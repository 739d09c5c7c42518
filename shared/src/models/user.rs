//! User Model

use serde::{Deserialize, Serialize};

/// Role value that unlocks the admin endpoints
pub const ADMIN_ROLE: &str = "admin";

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string, never sent to clients
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Free-text role; `"admin"` is the only value with meaning
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Registration payload
///
/// Every field is optional at the wire level so a missing field is reported
/// as a 400 by the handler rather than a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Login payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub role: String,
    /// Bearer token carrying the role claim
    pub token: String,
}

/// Public view of a user (`GET /api/user`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub role: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            role: user.role,
        }
    }
}

/// Query string for `GET /api/user`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            username: "baker".into(),
            password_hash: "$argon2id$secret".into(),
            role: "admin".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "baker");
        assert!(user.is_admin());
    }

    #[test]
    fn register_request_tolerates_missing_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"username":"a"}"#).unwrap();
        assert_eq!(req.username.as_deref(), Some("a"));
        assert!(req.password.is_none());
        assert!(req.role.is_none());
    }
}
