//! Model setup module
//!
//! Table definitions and record types for the document store. The site
//! only owns the user model; contact submissions are not persisted yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::engine::any::Any;
use surrealdb::Surreal;

pub const USER_TABLE: &str = "user";

/// A site user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub email: String,
    pub created: DateTime<Utc>,
}

/// Define the tables the site owns.
///
/// Idempotent, runs on every startup before any route is served.
pub async fn setup(db: &Surreal<Any>) -> Result<(), surrealdb::Error> {
    db.query("DEFINE TABLE IF NOT EXISTS user SCHEMALESS")
        .await?
        .check()?;
    Ok(())
}

/// Persist a user record
pub async fn create_user(db: &Surreal<Any>, user: User) -> Result<(), surrealdb::Error> {
    let _created: Option<User> = db.create(USER_TABLE).content(user).await?;
    Ok(())
}

/// Fetch every user record
pub async fn list_users(db: &Surreal<Any>) -> Result<Vec<User>, surrealdb::Error> {
    db.select(USER_TABLE).await
}
