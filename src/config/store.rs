// src/config/store.rs
// DOCUMENTATION: Data store client initialization
// PURPOSE: Build the single store client shared by all requests

use crate::config::Config;
use crate::db::{PostgrestStore, StoreError};

/// Initialize the hosted database client
/// DOCUMENTATION: Called once during startup. `api_key` is the anon key for the
/// server and the service role key for the seed binary. Missing credentials
/// are not an error here; the client reports them on every call.
pub fn init_store(config: &Config, api_key: &str) -> Result<PostgrestStore, StoreError> {
    log::info!("Initializing data store client: {}", config.supabase_url);

    let store = PostgrestStore::new(&config.supabase_url, api_key, config.store_timeout())?;

    if store.is_configured() {
        log::info!("Data store client initialized successfully");
    } else {
        log::warn!("Data store credentials missing - running in degraded mode");
    }

    Ok(store)
}
