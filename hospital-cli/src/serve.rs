//! Server startup: configuration, the single database connection, and the
//! HTTP listener.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use hospital_server::db::connection::DEFAULT_PORT;
use hospital_server::{run_server, DbConfig, MySqlStore, ServerConfig};

/// Arguments for starting the API server
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// MySQL host (falls back to the legacy DH_HOST variable)
    #[arg(long, env = "DB_HOST")]
    pub db_host: Option<String>,

    /// MySQL port
    #[arg(long, env = "DB_PORT", default_value_t = DEFAULT_PORT)]
    pub db_port: u16,

    /// MySQL user
    #[arg(long, env = "DB_USER")]
    pub db_user: String,

    /// MySQL password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "DB_NAME")]
    pub db_name: String,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT")]
    pub port: u16,

    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_HOST", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Only allow CORS requests from localhost origins
    #[arg(long)]
    pub cors_localhost: bool,
}

impl ServeArgs {
    fn db_config(&self) -> Result<DbConfig> {
        let host = self
            .db_host
            .clone()
            .or_else(|| std::env::var("DH_HOST").ok())
            .context("DB_HOST not set. Set via --db-host, DB_HOST env, or .env")?;

        Ok(DbConfig {
            host,
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
        })
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.bind, self.port),
            cors_permissive: !self.cors_localhost,
        }
    }
}

/// Connect to the database, then serve until shutdown.
///
/// A failed connection is fatal: it is logged and returned without retrying.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db_config()?;
    tracing::debug!(?db_config, "Database configuration loaded");

    let store = match MySqlStore::connect(&db_config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Error connecting to MySQL: {}", e);
            return Err(e).context("failed to connect to MySQL");
        }
    };

    run_server(Arc::new(store), args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
