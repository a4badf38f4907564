//! One-time seed script
//!
//! Writes the placeholder user record into the document store. Kept out
//! of normal startup on purpose; run it by hand when a fresh store needs
//! the demo account:
//!
//! ```sh
//! cargo run --bin seed
//! ```

use brdyorn::config::{Config, Mode};
use brdyorn::store::{self, models};
use chrono::Utc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::resolve(Mode::from_env())?;

    let db = store::connect(&config.store).await?;
    models::setup(&db).await?;

    let user = models::User {
        username: "TEST".to_string(),
        password: "PASS".to_string(),
        email: "someemail".to_string(),
        created: Utc::now(),
    };
    models::create_user(&db, user).await?;

    println!("Seeded placeholder user into {}", config.store.url);
    Ok(())
}
