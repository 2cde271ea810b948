pub mod employees;

use log::info;
use std::env;
use std::time::Duration;
use surrealdb::engine::any::{self, Any};
use surrealdb::Surreal;
use tokio::time::timeout;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn connect() -> Surreal<Any> {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let namespace = env::var("DATABASE_NS").unwrap_or_else(|_| "hrms".to_string());
    let database = env::var("DATABASE_NAME").unwrap_or_else(|_| "hrms".to_string());

    let db = timeout(CONNECT_TIMEOUT, any::connect(database_url))
        .await
        .expect("Timed out connecting to the database")
        .expect("Failed to connect to the database");

    db.use_ns(namespace)
        .use_db(database)
        .await
        .expect("Failed to select namespace and database");

    info!("Database connection established");
    db
}
