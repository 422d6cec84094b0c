//! Module assembly: store client -> access services -> HTTP router

use crate::api::native::NativeClient;
use crate::api::rest::routes::register_routes;
use crate::config::Config;
use crate::contract::MusicLibraryApi;
use crate::domain::{RowStore, Services};
use anyhow::{Context, Result};
use axum::{http::HeaderValue, Router};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Music library module
pub struct MusicLibraryModule {
    config: Config,
    services: Services,
}

impl MusicLibraryModule {
    /// Build the module around an already-connected store client
    pub fn new(config: Config, store: Arc<dyn RowStore>) -> Self {
        let services = Services::new(store, &config);
        tracing::info!(
            cascade_composer_delete = config.cascade_composer_delete,
            "Music library module initialized"
        );
        Self { config, services }
    }

    /// In-process client for other modules
    pub fn client(&self) -> Arc<dyn MusicLibraryApi> {
        Arc::new(NativeClient::new(self.services.clone()))
    }

    /// HTTP router with request tracing and the CORS policy applied
    pub fn router(&self) -> Result<Router> {
        let cors = cors_layer(&self.config.cors_allowed_origins)?;

        tracing::info!(
            origins = ?self.config.cors_allowed_origins,
            "Registering music library REST routes"
        );
        Ok(register_routes(Router::new(), &self.services)
            .layer(TraceLayer::new_for_http())
            .layer(cors))
    }
}

/// Explicit origin allow-list; any method and header, credentials allowed
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
