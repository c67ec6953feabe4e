use serde::Deserialize;

/// Configuration options for the Deskbook server.
#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    /// Path or URL of the SQLite database.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_database_url() -> String {
    "deskbook.db".to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}
