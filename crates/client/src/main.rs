//! `shelf` entry point: load the catalog, then apply commands from stdin.

use anyhow::Context;
use tokio::io::BufReader;

use shelf_client::{CatalogClient, ClientConfig, LoadController, ServiceWorker, repl};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shelf_observability::init();

    let config = ClientConfig::from_env();

    let mut service_worker = ServiceWorker::default();
    service_worker.unregister();

    let client = CatalogClient::new(&config).context("failed to build HTTP client")?;
    let controller = LoadController::spawn(client);

    tracing::info!(source = %config.source().describe(), "starting catalog");
    controller.set_source(config.source())?;

    let stdin = BufReader::new(tokio::io::stdin());
    repl::run(&controller, stdin, std::io::stdout()).await?;

    controller.shutdown().await;
    Ok(())
}
