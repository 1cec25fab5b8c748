//! Application Startup
//!
//! Store selection, service wiring and server initialization.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::services::{
    AccountService, AccountServiceImpl, MessageService, MessageServiceImpl,
};
use crate::config::{Settings, StorageBackend};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryAccountRepository, InMemoryMessageRepository, PgAccountRepository,
    PgMessageRepository,
};
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};
use crate::presentation::websocket::Gateway;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountService>,
    pub messages: Arc<dyn MessageService>,
    pub gateway: Arc<Gateway>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(
        accounts: Arc<dyn AccountService>,
        messages: Arc<dyn MessageService>,
        settings: Settings,
    ) -> Self {
        let gateway = Arc::new(Gateway::new(settings.notifications.channel_capacity));
        Self {
            accounts,
            messages,
            gateway,
            settings: Arc::new(settings),
        }
    }

    /// State backed by process-local repositories.
    pub fn in_memory(settings: Settings) -> Self {
        let accounts = AccountServiceImpl::new(Arc::new(InMemoryAccountRepository::new()));
        let messages = MessageServiceImpl::new(Arc::new(InMemoryMessageRepository::new()));
        Self::new(Arc::new(accounts), Arc::new(messages), settings)
    }

    /// State backed by PostgreSQL, migrating the schema first if configured.
    pub async fn postgres(settings: Settings) -> Result<Self> {
        let pool = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        let accounts = AccountServiceImpl::new(Arc::new(PgAccountRepository::new(pool.clone())));
        let messages = MessageServiceImpl::new(Arc::new(PgMessageRepository::new(pool)));
        Ok(Self::new(Arc::new(accounts), Arc::new(messages), settings))
    }
}

/// Router with the tracing and CORS layers applied.
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);
    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(create_trace_layer())
            .layer(cors),
    )
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = match settings.storage.backend {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data will not survive a restart");
                AppState::in_memory(settings.clone())
            }
            StorageBackend::Postgres => AppState::postgres(settings.clone()).await?,
        };

        let router = build_router(state);

        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until Ctrl-C
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
