use std::sync::Arc;

use servedir::config::ServerConfig;
use servedir::handler::listing;
use servedir::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = ServerConfig::from_cwd()?;

    // Single-threaded runtime: one connection is fully served before the
    // next is accepted
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Bind failure (e.g. port already in use) is fatal
    let listener = server::bind_listener(cfg.socket_addr())?;

    let sample = listing::sample_entries(&cfg.root, logger::BANNER_SAMPLE_LIMIT);
    logger::log_server_start(&cfg, &sample);

    let shutdown = Arc::new(server::ShutdownSignal::new());
    server::start_signal_handler(Arc::clone(&shutdown));

    server::run(listener, Arc::new(cfg), shutdown).await?;

    logger::log_shutdown();
    Ok(())
}
