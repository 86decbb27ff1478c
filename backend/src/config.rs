use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use clap::Parser;

/// Runtime configuration, from command line flags or their environment variables
#[derive(Debug, Clone, Parser)]
#[command(name = "transactions-server", about = "REST API for income and expense transactions")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "TRANSACTIONS_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to serve on
    #[arg(short, long, env = "TRANSACTIONS_PORT", default_value_t = 3000)]
    pub port: u16,

    /// SQLite database URL, created if missing
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:transactions.db")]
    pub database_url: String,

    /// Origin allowed to call the API from a browser
    #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:8080")]
    pub cors_origin: HeaderValue,

    /// Tracing filter directives
    #[arg(long, env = "RUST_LOG", default_value = "info,tower_http=debug")]
    pub log_filter: String,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
