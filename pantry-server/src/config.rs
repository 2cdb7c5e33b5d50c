use std::env;
use std::net::SocketAddr;

/// Runtime configuration, read once at startup. The API key is injected here
/// and threaded into the auth middleware; it is never a compile-time constant.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub api_key: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let api_key = env::var("API_KEY").expect("API_KEY must be set");
        let listen_addr = env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("LISTEN_ADDR must be a valid socket address");

        Self {
            database_url,
            api_key,
            listen_addr,
        }
    }
}
