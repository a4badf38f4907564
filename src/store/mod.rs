//! Document store module
//!
//! Connects to the configured SurrealDB endpoint through the `any`
//! engine, so `mem://`, `ws://` and `http://` URLs all work without code
//! changes. Connection failure at startup is fatal by design.

pub mod models;

use crate::config::StoreConfig;
use surrealdb::engine::any::Any;
use surrealdb::Surreal;

/// Connect and select the configured namespace/database
pub async fn connect(cfg: &StoreConfig) -> Result<Surreal<Any>, surrealdb::Error> {
    let db = surrealdb::engine::any::connect(cfg.url.as_str()).await?;
    db.use_ns(cfg.namespace.as_str())
        .use_db(cfg.database.as_str())
        .await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn mem_config() -> StoreConfig {
        StoreConfig {
            url: "mem://".to_string(),
            namespace: "site".to_string(),
            database: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_connect_and_setup() {
        let db = connect(&mem_config()).await.unwrap();
        models::setup(&db).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_and_list_users() {
        let db = connect(&mem_config()).await.unwrap();
        models::setup(&db).await.unwrap();

        models::create_user(
            &db,
            models::User {
                username: "TEST".to_string(),
                password: "PASS".to_string(),
                email: "someemail".to_string(),
                created: Utc::now(),
            },
        )
        .await
        .unwrap();

        let users = models::list_users(&db).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "TEST");
    }
}
