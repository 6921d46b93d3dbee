//! CommsAI backend entry point.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use commsai::adapters::ai::{MockCompletionProvider, OpenAiConfig, OpenAiDispatcher};
use commsai::adapters::directory::InMemoryPlanDirectory;
use commsai::adapters::http::{api_router, AppState};
use commsai::adapters::identity::StubIdentityReader;
use commsai::adapters::store::{
    InMemoryCampaignStore, InMemoryValuePropStore, RealtimeStore, RealtimeStoreConfig,
};
use commsai::config::AppConfig;
use commsai::ports::{CampaignStore, CompletionProvider, ValuePropStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("commsai=debug,tower_http=info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let completion: Arc<dyn CompletionProvider> = match &config.ai.openai_api_key {
        Some(api_key) if !api_key.is_empty() => Arc::new(OpenAiDispatcher::new(
            OpenAiConfig::new(api_key.clone())
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone())
                .with_timeout(config.ai.timeout())
                .with_max_retries(config.ai.max_retries),
        )),
        _ => {
            tracing::warn!("no API key configured; using the scripted completion provider");
            Arc::new(MockCompletionProvider::new())
        }
    };

    let (campaign_store, value_prop_store): (Arc<dyn CampaignStore>, Arc<dyn ValuePropStore>) =
        match &config.store.database_url {
            Some(url) if !url.is_empty() => {
                let mut store_config =
                    RealtimeStoreConfig::new(url.clone()).with_timeout(config.store.timeout());
                if let Some(token) = &config.store.auth_token {
                    store_config = store_config.with_auth_token(token.clone());
                }
                let store = Arc::new(RealtimeStore::new(store_config));
                (store.clone(), store)
            }
            _ => {
                tracing::warn!("no database URL configured; keeping records in process memory");
                (
                    Arc::new(InMemoryCampaignStore::new()),
                    Arc::new(InMemoryValuePropStore::new()),
                )
            }
        };

    let state = AppState {
        completion,
        campaign_store,
        value_prop_store,
        directory: Arc::new(InMemoryPlanDirectory::with_demo_data()),
        identity: Arc::new(StubIdentityReader::new()),
    };

    let router = api_router(state);
    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "commsai backend listening");

    axum::serve(listener, router).await?;
    Ok(())
}
