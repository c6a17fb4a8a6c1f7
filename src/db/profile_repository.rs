//! Profile repository for corkboard.
//!
//! This module provides CRUD operations for profiles in the database.

use sqlx::SqlitePool;

use super::profile::{NewProfile, Profile, Role};
use crate::{CorkboardError, Result};

const PROFILE_COLUMNS: &str =
    "id, username, password, role, email, bio, avatar, created_at";

/// Repository for profile CRUD operations.
pub struct ProfileRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProfileRepository<'a> {
    /// Create a new ProfileRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new profile in the database.
    ///
    /// Returns the created profile with the assigned ID.
    pub async fn create(&self, new_profile: &NewProfile) -> Result<Profile> {
        let result = sqlx::query(
            "INSERT INTO profiles (username, password, role, email, bio, avatar)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_profile.username)
        .bind(&new_profile.password)
        .bind(new_profile.role.as_str())
        .bind(&new_profile.email)
        .bind(&new_profile.bio)
        .bind(&new_profile.avatar)
        .execute(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("profile".to_string()))
    }

    /// Get a profile by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Profile>> {
        let result = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a profile by username (case-insensitive).
    pub async fn get_by_username(&self, username: &str) -> Result<Option<Profile>> {
        let result = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE username = ? COLLATE NOCASE"
        ))
        .bind(username)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get an existing profile by username, or create it atomically.
    ///
    /// Relies on the unique constraint on `username`: the upsert is a single
    /// statement, so two concurrent calls for the same username cannot
    /// produce duplicate rows. Fields other than the key are only applied
    /// when the row is first created.
    pub async fn get_or_create(&self, new_profile: &NewProfile) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "INSERT INTO profiles (username, password, role, email, bio, avatar)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(username) DO UPDATE SET username = excluded.username
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(&new_profile.username)
        .bind(&new_profile.password)
        .bind(new_profile.role.as_str())
        .bind(&new_profile.email)
        .bind(&new_profile.bio)
        .bind(&new_profile.avatar)
        .fetch_one(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(profile)
    }

    /// Check if a username is already taken (case-insensitive).
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM profiles WHERE username = ? COLLATE NOCASE)",
        )
        .bind(username)
        .fetch_one(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;
        Ok(exists.0)
    }

    /// Change a profile's role.
    ///
    /// Returns the updated profile, or None if not found.
    pub async fn set_role(&self, id: i64, role: Role) -> Result<Option<Profile>> {
        let result = sqlx::query("UPDATE profiles SET role = ? WHERE id = ?")
            .bind(role.as_str())
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }
}
