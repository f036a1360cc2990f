//! Reusable server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: database init, migrations,
//! default superuser, REST API, metrics and graceful shutdown.

use sea_orm::DatabaseConnection;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::infrastructure::crypto::password::DEFAULT_COST;
use crate::infrastructure::{init_database, run_migrations};
use crate::interfaces::http::modules::metrics::prometheus_handle;
use crate::interfaces::{create_api_router, ApiContext};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
    /// Create the configured superuser if no users exist (default: true).
    pub create_default_admin: bool,
    pub bcrypt_cost: u32,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
            create_default_admin: true,
            bcrypt_cost: DEFAULT_COST,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running API server.
///
/// ```rust,no_run
/// use hotel_booking::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub config: AppConfig,
    /// Port the API is actually bound to.
    pub port: u16,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;
        info!("Starting hotel booking service...");

        if app_cfg.uses_default_secret() {
            warn!("Using the default JWT secret; set security.jwt_secret or JWT_SECRET");
        }

        let metrics = prometheus_handle();

        let db = init_database(&app_cfg.database_config()).await?;
        if opts.auto_migrate {
            run_migrations(&db).await?;
        }

        let jwt_config = app_cfg.jwt_config();
        info!(
            access_ttl_minutes = jwt_config.access_ttl_minutes,
            refresh_ttl_hours = jwt_config.refresh_ttl_hours,
            "JWT configured"
        );

        let ctx = ApiContext::new(db.clone(), jwt_config, opts.bcrypt_cost, metrics);

        if opts.create_default_admin {
            let admin = &app_cfg.admin;
            if let Err(e) = ctx
                .users
                .ensure_superuser(&admin.username, admin.email.as_deref(), &admin.password)
                .await
            {
                error!("Failed to create default superuser: {}", e);
            }
        }

        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        let addr = app_cfg.server.address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();
        info!("REST API listening on http://{}", addr);
        info!("Swagger UI available at http://{}/docs/", addr);

        let api_server = axum::serve(listener, create_api_router(ctx)).with_graceful_shutdown(
            async move {
                shutdown_signal.wait().await;
                info!("REST API server received shutdown signal");
            },
        );

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            config: app_cfg,
            port,
            db,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install SIGTERM/SIGINT listeners that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the API to drain after shutdown was triggered, then close the pool.
    pub async fn wait(self) {
        let Self {
            db,
            shutdown,
            api_task,
            ..
        } = self;

        let drained = shutdown
            .shutdown_with_cleanup(|| async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task panicked: {}", e),
                }
            })
            .await;
        if !drained {
            warn!("Closing database with requests still in flight");
        }

        if let Err(e) = db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
        info!("Hotel booking service shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        self.trigger_shutdown();
        self.wait().await;
    }
}

/// Initialize tracing from the logging section. `RUST_LOG` wins over the config.
///
/// Call once at process startup, before [`ServerHandle::start`].
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
