//! MySQL connection management
//!
//! One connection is opened at startup. There is no pool and no retry; a
//! failure here is fatal to the caller.

use std::fmt;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

/// Default MySQL port when none is configured.
pub const DEFAULT_PORT: u16 = 3306;

/// Connection settings for the hospital database.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

impl DbConfig {
    /// Build sqlx connect options from these settings.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Open the single connection described by `config`.
///
/// # Errors
///
/// Returns an error if the server is unreachable or rejects the credentials.
///
/// # Example
///
/// ```ignore
/// let conn = connect(&config).await?;
/// let store = MySqlStore::new(conn);
/// ```
pub async fn connect(config: &DbConfig) -> Result<MySqlConnection, sqlx::Error> {
    tracing::debug!(host = %config.host, port = config.port, database = %config.database, "Connecting to MySQL");
    connect_with(&config.connect_options()).await
}

/// Open a connection from prebuilt options and log its server thread id.
pub async fn connect_with(options: &MySqlConnectOptions) -> Result<MySqlConnection, sqlx::Error> {
    let mut conn = MySqlConnection::connect_with(options).await?;

    let (thread_id,): (u64,) = sqlx::query_as("SELECT CONNECTION_ID()")
        .fetch_one(&mut conn)
        .await?;
    tracing::info!(thread_id, "Connected to MySQL");

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config() -> DbConfig {
        DbConfig {
            host: "localhost".into(),
            port: DEFAULT_PORT,
            user: "root".into(),
            password: "hunter2".into(),
            database: "hospital_db".into(),
        }
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", config());
        assert!(rendered.contains("hospital_db"));
        assert!(!rendered.contains("hunter2"));
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error() {
        let mut config = config();
        config.host = "127.0.0.1".into();
        config.port = 1;

        assert!(connect(&config).await.is_err());
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=mysql://... cargo test -p hospital-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connection_executes_queries() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let options = MySqlConnectOptions::from_str(&url).expect("invalid DATABASE_URL");
        let mut conn = connect_with(&options).await.expect("connection failed");

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&mut conn)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
