use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use dotenvy::dotenv;
use std::env;

pub mod aggregate;
pub mod error;
pub mod models;
pub mod schema;
pub mod service;
pub mod store;

pub use error::RevenueError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub fn establish_connection() -> Result<PgConnection, RevenueError> {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL")?;
    Ok(PgConnection::establish(&database_url)?)
}

pub fn run_migrations(conn: &mut PgConnection) -> Result<(), RevenueError> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| RevenueError::Migration(e.to_string()))?;
    Ok(())
}
