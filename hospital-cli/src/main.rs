//! hospital-api - read-only HTTP API over hospital_db
//!
//! Reads database credentials and the listen port from flags, the
//! environment, or a `.env` file, opens one MySQL connection, and serves
//! the patients/providers endpoints until Ctrl+C or SIGTERM.

use anyhow::Result;
use clap::Parser;

mod serve;
mod tracing_setup;

use serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "hospital-api",
    version,
    about = "Read-only HTTP API over the hospital_db patients and providers tables"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    serve::run_serve(cli.serve).await
}
