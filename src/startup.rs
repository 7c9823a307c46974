//! Application Startup
//!
//! Application building and server initialization.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::domain::{CommentRepository, ThreadRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgCommentRepository, PgThreadRepository};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};
use crate::shared::id_generator::{IdGenerator, RandomIdGenerator};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub thread_repo: Arc<dyn ThreadRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the PostgreSQL repositories onto a pool
    pub fn new(db: PgPool, settings: Settings) -> Self {
        let ids: Arc<dyn IdGenerator> = Arc::new(RandomIdGenerator::default());
        let thread_repo = Arc::new(PgThreadRepository::new(db.clone(), ids.clone()));
        let comment_repo = Arc::new(PgCommentRepository::new(db.clone(), ids));

        Self::with_repositories(db, thread_repo, comment_repo, settings)
    }

    /// Build state around caller-supplied repositories
    pub fn with_repositories(
        db: PgPool,
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        settings: Settings,
    ) -> Self {
        Self {
            db,
            thread_repo,
            comment_repo,
            settings: Arc::new(settings),
        }
    }
}

/// Routes plus the tracing and CORS layers
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        let addr = settings.server_addr();
        let router = build_router(AppState::new(db, settings));

        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

/// Resolve once `signal` fires. If the handler cannot be installed the
/// server keeps running instead of shutting down immediately.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
