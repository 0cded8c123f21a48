//! # User model
//!
//! Two representations of a Plateful user:
//!
//! - [`User`] (server only) — the complete `users` row, loaded via
//!   [`sqlx::FromRow`]. Holds the argon2 `password_hash` and audit
//!   timestamps, which must never cross to the client.
//! - [`UserInfo`] — the client-safe projection that travels through server
//!   functions. The `Uuid` becomes a `String` so it works in WASM, and only
//!   the email and the two profile columns (`first_name`, `last_name`) are
//!   exposed.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserInfo {
    /// Get display name: "First Last", either half alone, or the email.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(first: Option<&str>, last: Option<&str>) -> UserInfo {
        UserInfo {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            email: "cook@example.com".to_string(),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
        }
    }

    #[test]
    fn display_name_prefers_full_name() {
        assert_eq!(
            info(Some("Ada"), Some("Lovelace")).display_name(),
            "Ada Lovelace"
        );
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(info(None, None).display_name(), "cook@example.com");
        assert_eq!(info(Some("Ada"), None).display_name(), "Ada");
    }
}
