use thiserror::Error;

#[derive(Error, Debug)]
pub enum RevenueError {
    #[error("DATABASE_URL must be set")]
    Config(#[from] std::env::VarError),
    #[error("error while connecting to the database")]
    Connection(#[from] diesel::ConnectionError),
    #[error("error while executing database query")]
    Query(#[from] diesel::result::Error),
    #[error("failed to run migrations: {0}")]
    Migration(String),
}
