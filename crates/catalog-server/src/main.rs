//! # Catalog Cache Server
//!
//! Main entry point for the product catalog cache. Serves the product API
//! from MySQL with a cache-aside layer in front of it.

use catalog_config::{AppConfig, ConfigLoader, LogFormat, ObservabilityConfig};
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::{DatabaseHealthCheck, DatabasePool};
use catalog_rest::{create_router, AppState};
use catalog_server::{
    di::{build_catalog_module, CatalogResolver},
    startup::{print_banner, print_startup_info},
};
use catalog_service::CacheHealthCheck;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    print_banner();

    info!("Starting Catalog Cache Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> CatalogResult<()> {
    let db_pool = DatabasePool::new(&config.database).await?;

    // Build DI module
    let module = build_catalog_module(db_pool, &config)?;
    let database = module.database_pool();

    if config.database.run_migrations {
        database.run_migrations().await?;
    }

    let app_state = AppState::from_module(module.as_ref())
        .with_health_check(Arc::new(DatabaseHealthCheck::new(database.clone())))
        .with_health_check(Arc::new(CacheHealthCheck::new(module.cache())));

    let router = create_router(app_state, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CatalogError::Internal(format!("REST server error: {}", e)))?;

    database.close().await;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging(config: &ObservabilityConfig) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=debug", config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
