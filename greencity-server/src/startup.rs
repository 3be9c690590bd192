//! Server startup and shutdown logic

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{middleware, Router};
use greencity_rest_api::{create_app, AppConfig, AppContext};
use greencity_web::middleware::auth::{auth_middleware, optional_auth_middleware, JwtManager};
use tokio::net::TcpListener;

use crate::{config::ServerConfig, services::InMemoryGreenCity};

/// Server application struct
pub struct Server {
    config: ServerConfig,
    services: Arc<InMemoryGreenCity>,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: ServerConfig) -> Result<Self> {
        crate::services::init_logging(&config.logging)?;

        Ok(Self {
            config,
            services: InMemoryGreenCity::seeded(),
        })
    }

    /// Build the complete application router
    pub fn build_app(&self) -> Router {
        let context = AppContext::new(
            self.services.clone(),
            self.services.clone(),
            self.services.clone(),
            self.services.clone(),
            self.services.clone(),
        );

        let app_config = AppConfig {
            enable_cors: self.config.server.enable_cors,
            cors: self.config.cors.clone(),
            enable_request_id: self.config.server.enable_request_id,
            enable_tracing: self.config.server.enable_tracing,
        };

        let app = create_app(context, app_config);

        // Bearer tokens always resolve to a principal; whether a
        // missing token rejects the request is configuration
        let jwt_manager = Arc::new(JwtManager::new(self.config.auth.clone()));
        if self.config.auth.require_auth {
            app.layer(middleware::from_fn_with_state(jwt_manager, auth_middleware))
        } else {
            app.layer(middleware::from_fn_with_state(
                jwt_manager,
                optional_auth_middleware,
            ))
        }
    }

    /// Start the server and run until shutdown
    pub async fn start(self) -> Result<()> {
        let app = self.build_app();
        let addr = self.config.server.bind_address;

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        tracing::info!("GreenCity gateway listening on {}", addr);
        self.log_config_summary();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    fn log_config_summary(&self) {
        tracing::info!("CORS enabled: {}", self.config.server.enable_cors);
        tracing::info!("Request IDs enabled: {}", self.config.server.enable_request_id);
        tracing::info!("Auth required: {}", self.config.auth.require_auth);
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    } else {
        tracing::info!("Shutdown signal received");
    }
}
