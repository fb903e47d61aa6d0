//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    /// Base URL of the remote back-office API, without a trailing slash.
    pub api_base_url: String,
    pub templates_dir: String,
    pub assets_dir: String,
    /// Cookie/JWT signing secret; must be at least 64 bytes.
    pub secret: String,
}
