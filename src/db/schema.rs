//! Database schema and migrations for corkboard.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - profiles table
    r#"
-- Profiles table for authentication and authorship
CREATE TABLE profiles (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    username    TEXT NOT NULL UNIQUE,
    password    TEXT NOT NULL,           -- Argon2 hash
    role        TEXT NOT NULL DEFAULT 'serf',  -- 'serf' or 'admin'
    email       TEXT,
    bio         TEXT,
    avatar      TEXT,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_profiles_username ON profiles(username);
CREATE INDEX idx_profiles_role ON profiles(role);
"#,
    // v2: Suppression reason catalog, deduplicated by code
    r#"
-- Suppression reasons, created on demand and shared across items
CREATE TABLE suppression_reasons (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    code        TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT ''
);
"#,
    // v3: Posts table with embedded suppression record
    r#"
-- Posts table; the four suppression columns form one record and are
-- written together or not at all
CREATE TABLE posts (
    id                   INTEGER PRIMARY KEY AUTOINCREMENT,
    author_id            INTEGER NOT NULL REFERENCES profiles(id),
    title                TEXT NOT NULL,
    content              TEXT NOT NULL,
    created_at           TEXT NOT NULL DEFAULT (datetime('now')),
    is_suppressed        INTEGER NOT NULL DEFAULT 0,
    suppressed_reason_id INTEGER REFERENCES suppression_reasons(id),
    suppressed_at        TEXT,
    suppressed_by        INTEGER REFERENCES profiles(id)
);

CREATE INDEX idx_posts_author_id ON posts(author_id);
CREATE INDEX idx_posts_created_at ON posts(created_at);
CREATE INDEX idx_posts_is_suppressed ON posts(is_suppressed);
"#,
    // v4: Comments table, same suppression record shape
    r#"
-- Comments; suppression is independent of the parent post's suppression
CREATE TABLE comments (
    id                   INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id              INTEGER NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    author_id            INTEGER NOT NULL REFERENCES profiles(id),
    content              TEXT NOT NULL,
    created_at           TEXT NOT NULL DEFAULT (datetime('now')),
    is_suppressed        INTEGER NOT NULL DEFAULT 0,
    suppressed_reason_id INTEGER REFERENCES suppression_reasons(id),
    suppressed_at        TEXT,
    suppressed_by        INTEGER REFERENCES profiles(id)
);

CREATE INDEX idx_comments_post_id ON comments(post_id);
CREATE INDEX idx_comments_author_id ON comments(author_id);
CREATE INDEX idx_comments_created_at ON comments(created_at);
"#,
];
