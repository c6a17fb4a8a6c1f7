//! Profile model for corkboard.
//!
//! This module defines the Profile struct and Role enum for identity
//! and moderation capability.

use std::fmt;
use std::str::FromStr;

/// Role determining moderation capability.
///
/// The role set is closed; roles are never created from arbitrary strings
/// at runtime, only parsed at the storage boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Regular user without moderation privileges.
    #[default]
    Serf,
    /// Administrator with moderation privileges.
    Admin,
}

impl Role {
    /// Convert role to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Serf => "serf",
            Role::Admin => "admin",
        }
    }

    /// Whether this role grants moderation capability.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard::db::Role;
    ///
    /// assert!(Role::Admin.can_moderate());
    /// assert!(!Role::Serf.can_moderate());
    /// ```
    pub fn can_moderate(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serf" => Ok(Role::Serf),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// Profile entity representing an authenticated principal.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Unique profile ID.
    pub id: i64,
    /// Login username (unique).
    pub username: String,
    /// Password hash (Argon2).
    pub password: String,
    /// Role for moderation capability.
    pub role: Role,
    /// Email address (optional).
    pub email: Option<String>,
    /// Biography text (optional).
    pub bio: Option<String>,
    /// Avatar image reference (optional).
    pub avatar: Option<String>,
    /// Account creation timestamp.
    pub created_at: String,
}

impl Profile {
    /// Whether this profile may moderate content.
    pub fn can_moderate(&self) -> bool {
        self.role.can_moderate()
    }
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for Profile {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        use sqlx::Row;

        let role_str: String = row.try_get("role")?;
        let role = role_str
            .parse::<Role>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "role".to_string(),
                source: e.into(),
            })?;

        Ok(Profile {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            password: row.try_get("password")?,
            role,
            email: row.try_get("email")?,
            bio: row.try_get("bio")?,
            avatar: row.try_get("avatar")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Data for creating a new profile.
#[derive(Debug, Clone)]
pub struct NewProfile {
    /// Login username.
    pub username: String,
    /// Password hash (should be pre-hashed with Argon2).
    pub password: String,
    /// Role (defaults to Serf).
    pub role: Role,
    /// Email address (optional).
    pub email: Option<String>,
    /// Biography text (optional).
    pub bio: Option<String>,
    /// Avatar image reference (optional).
    pub avatar: Option<String>,
}

impl NewProfile {
    /// Create a new profile with minimal required fields.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: Role::Serf,
            email: None,
            bio: None,
            avatar: None,
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the biography.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Set the avatar reference.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from_str("serf").unwrap(), Role::Serf);
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert!(Role::from_str("sysop").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(Role::Serf.as_str(), "serf");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_role_can_moderate() {
        assert!(Role::Admin.can_moderate());
        assert!(!Role::Serf.can_moderate());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", Role::Admin), "admin");
    }

    #[test]
    fn test_role_default() {
        assert_eq!(Role::default(), Role::Serf);
    }

    #[test]
    fn test_new_profile_builder() {
        let profile = NewProfile::new("testuser", "hash")
            .with_role(Role::Admin)
            .with_email("test@example.com")
            .with_bio("Hello");

        assert_eq!(profile.username, "testuser");
        assert_eq!(profile.password, "hash");
        assert_eq!(profile.role, Role::Admin);
        assert_eq!(profile.email, Some("test@example.com".to_string()));
        assert_eq!(profile.bio, Some("Hello".to_string()));
        assert!(profile.avatar.is_none());
    }

    #[test]
    fn test_profile_can_moderate() {
        let profile = Profile {
            id: 1,
            username: "mod".to_string(),
            password: "hash".to_string(),
            role: Role::Admin,
            email: None,
            bio: None,
            avatar: None,
            created_at: "2024-01-01 00:00:00".to_string(),
        };
        assert!(profile.can_moderate());

        let serf = Profile {
            role: Role::Serf,
            ..profile
        };
        assert!(!serf.can_moderate());
    }
}
