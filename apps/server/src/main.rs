use anyhow::Context;
use dh::domain::config::ApiConfig;
use dh::domain::constants::DEFAULT_CONFIG_FILE;
use dh::kernel::config::load_config;
use dh_logger::Logger;
use dh_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_owned());
    let cfg: ApiConfig = load_config(Some(&path)).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder(env!("CARGO_PKG_NAME")).with_config(&cfg.logging)?.init()?;
    tracing::info!(config = %path, "Configuration loaded");

    Server::builder().config(cfg).build()?.run().await
}
