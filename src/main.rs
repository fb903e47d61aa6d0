//! Console entry point: configuration, logging, then the server loop.

use config::Config;
use dotenvy::dotenv;

use clientela_admin::models::config::ServerConfig;
use clientela_admin::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config_path = std::env::var("CONSOLE_CONFIG").unwrap_or_else(|_| "config".to_string());

    let server_config: ServerConfig = Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .add_source(config::Environment::default())
        .build()
        .and_then(|config| config.try_deserialize())
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    run(server_config).await
}
