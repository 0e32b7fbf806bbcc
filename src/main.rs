use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Worker thread count comes from configuration; unset means one per core
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

/// Bind the listener and run the accept loop on the main task.
///
/// Bind failures are fatal and propagate out of `main`; the listener and the
/// runtime are released on drop.
async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_listener(addr, cfg.server.backlog)?;

    logger::log_server_start(&addr, &cfg);

    server::run_accept_loop(listener, Arc::new(cfg)).await
}
