use std::sync::Arc;

use anyhow::Context;
use contacts_engine::{ContactStore, DataProvider};
use contacts_logging::{contacts_info, contacts_warn};
use tokio::net::TcpListener;

use super::config::Config;
use super::routes::{build_router, ServerState};

/// Opens the store, binds the listener and serves until Ctrl-C.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let provider: Arc<dyn DataProvider> = if config.in_memory {
        contacts_info!("Using in-memory contact store");
        Arc::new(ContactStore::in_memory())
    } else {
        let store = ContactStore::open(&config.data_file)
            .with_context(|| format!("opening contact store {:?}", config.data_file))?;
        Arc::new(store)
    };

    let app = build_router(ServerState::new(provider));
    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    contacts_info!("contacts listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;
    contacts_info!("contacts stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        contacts_warn!("Could not listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
    contacts_info!("Shutdown requested");
}
