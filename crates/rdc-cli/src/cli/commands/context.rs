//! Wiring shared by every command: one executor built from config.

use anyhow::Result;
use rdc_core::auth::StoredTokenProvider;
use rdc_core::config::ClientConfig;
use rdc_core::connectivity::{AlwaysOnline, ConnectivityGate, ProbeGate};
use rdc_core::session_store::JsonFileStore;
use rdc_core::transport::CurlTransport;
use rdc_core::{ApiClient, RetryingExecutor};
use std::sync::Arc;

pub struct Context {
    pub cfg: ClientConfig,
    pub store: Arc<JsonFileStore>,
    pub gate: Arc<dyn ConnectivityGate>,
    pub api: ApiClient,
}

impl Context {
    pub fn build(cfg: ClientConfig) -> Result<Self> {
        let store = Arc::new(JsonFileStore::open_default()?);
        let gate: Arc<dyn ConnectivityGate> = match &cfg.connectivity_probe {
            Some(addr) => Arc::new(ProbeGate::new(addr.clone())),
            None => Arc::new(AlwaysOnline),
        };
        let tokens = Arc::new(StoredTokenProvider::new(store.clone(), cfg.token_key.clone()));
        let executor = RetryingExecutor::from_config(
            &cfg,
            Arc::new(CurlTransport::new()),
            gate.clone(),
            tokens,
        );
        let api = ApiClient::new(cfg.base_url.as_deref().unwrap_or(""), Arc::new(executor));
        Ok(Self {
            cfg,
            store,
            gate,
            api,
        })
    }
}
