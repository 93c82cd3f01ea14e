use crate::config::TodoConfig;
use crate::database::TodoRepository;
use crate::database::mysql::{MySqlTodoRepository, create_pool};
use crate::features::{route_not_found, welcome_handler};
use axum::Router;
use axum::ServiceExt;
use axum::extract::Request;
use axum::routing::get;
use http::{Method, header};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod database;
pub mod domain;
pub mod features;


#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TodoRepository>,
    pub config: Arc<TodoConfig>,
}

// only the configured origin may call us, with credentials
fn cors_layer(config: &TodoConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// trailing slashes are trimmed before routing, so /api/todo/ is /api/todo
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    // api router, where features are composed
    let api_router = Router::new().nest("/todo", features::todos::todos_router());

    let cors = cors_layer(&state.config);

    let router = Router::new()
        .route("/", get(welcome_handler))
        .nest("/api", api_router)
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt().init();

    // load centralized config
    let config = TodoConfig::from_env()?;
    let shared_config = Arc::new(config.clone());

    tracing::info!(
        "Connecting to database {} at {}:{} as {} (max {} connections)",
        config.db_name,
        config.db_host,
        config.db_port,
        config.db_user,
        config.max_connections
    );
    let pool = create_pool(&config);
    let repo = MySqlTodoRepository::new(pool);

    // one connectivity check at boot, there is no retry
    if let Err(e) = repo.ping().await {
        tracing::error!("Database connection failed: {:#}", e);
        std::process::exit(1);
    }
    tracing::info!("Connected to database {}", config.db_name);

    let app_state = AppState {
        repo: Arc::new(repo),
        config: shared_config,
    };
    let app = app_router(app_state);

    let address = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Server listening on http://{}", address);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
