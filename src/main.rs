use std::sync::Arc;

use tokio::sync::Notify;

mod catalog;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::bind_listener(addr)?;

    let catalog = catalog::CafeCatalog::load(cfg.catalog.file.as_deref());
    logger::log_server_start(&addr, &cfg, catalog.len());

    let state = Arc::new(config::AppState::new(cfg, catalog));

    let shutdown = Arc::new(Notify::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown));

    // Connection tasks are spawned with spawn_local and need a LocalSet
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run_accept_loop(listener, state, shutdown))
        .await;

    Ok(())
}
