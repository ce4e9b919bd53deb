use anyhow::{Context, Result};
use ready_wrapper::{LoggingMiddleware, Options, Store, middleware, ready};

mod actions;
mod config;
mod logger;
mod state;

use actions::{add_todo, add_todo_later, load_todos};
use config::TodosConfig;
use state::{TodoState, reduce};

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();

    log::info!("Starting ready-wrapper-todos");

    let config = TodosConfig::load();

    // Add middleware in order (they execute in this order)
    let store = Store::builder(TodoState::default(), reduce)
        .add_middleware(Box::new(middleware()))
        .add_middleware(Box::new(LoggingMiddleware::new()))
        .build();

    let added = store.dispatch(add_todo("read the docs")).await?;
    log::info!("Plain dispatch resolved to {:?}", added);

    let added = store.dispatch(add_todo_later("write a reducer")).await?;
    log::info!("Wrapped dispatch resolved to {:?}", added);

    let pending = store.dispatch(load_todos(&config));
    log::info!("Fetching todos, loading = {}", store.state().loading);
    match pending.await {
        Ok(result) => log::info!("Fetch resolved to {:?}", result),
        Err(e) => log::error!("Fetch failed: {}", e),
    }

    match store
        .dispatch(ready::<TodoState, _>("not a function", Options::new()))
        .await
    {
        Ok(result) => log::warn!("Invalid callback unexpectedly resolved to {:?}", result),
        Err(e) => log::info!("Invalid callback rejected: {}", e),
    }

    let state = serde_json::to_string_pretty(&store.state()).context("Failed to render state")?;
    println!("{}", state);

    Ok(())
}
