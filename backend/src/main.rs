//! Backend entry-point: loads settings, connects the document store and
//! serves the knowledge group API until the server stops.

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use knowledge_backend::inbound::http::health::HealthState;
use knowledge_backend::inbound::http::state::HttpState;
use knowledge_backend::outbound::persistence::{MongoKnowledgeGroupRepository, MongoStore};
use knowledge_backend::server::{ServerConfig, create_server};
use knowledge_backend::settings::AppSettings;
use ortho_config::OrthoConfig;

const DEFAULT_LOG_FILTER: &str = "info";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    init_tracing(&settings)?;

    if let Some(proxy) = settings.http_proxy()? {
        info!(proxy = %proxy, "outbound proxy configured");
    }

    let mongo = settings.mongo();
    let store = MongoStore::connect(&mongo)
        .await
        .wrap_err("document store unavailable at startup")?;
    let repository = Arc::new(MongoKnowledgeGroupRepository::new(&store));
    let http_state = HttpState::from_repository(repository);

    let bind_addr = settings.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, http_state))
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;

    health_state.mark_ready();
    info!(
        %bind_addr,
        environment = settings.environment(),
        database = mongo.database(),
        "knowledge backend listening"
    );

    let outcome = server.await;
    health_state.mark_unhealthy();
    store.shutdown().await;
    info!("knowledge backend stopped");

    outcome.wrap_err("HTTP server terminated with an error")
}

fn init_tracing(settings: &AppSettings) -> Result<()> {
    let filter = match settings.log_filter() {
        Some(directive) => EnvFilter::try_new(directive)
            .wrap_err_with(|| format!("invalid log filter: {directive}"))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    let init = if settings.is_development() {
        fmt().with_env_filter(filter).pretty().try_init()
    } else {
        fmt().with_env_filter(filter).json().try_init()
    };
    init.map_err(|err| eyre!("failed to initialise tracing: {err}"))
}
