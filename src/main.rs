//! EchoGallery taste backend binary: wires configuration, storage, and the
//! HTTP API together.

use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;

use http::HeaderValue;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use echogallery_taste::adapters::embedding::StubEmbeddingModel;
use echogallery_taste::adapters::http::{api_router, TasteHandlers};
use echogallery_taste::adapters::sqlite::{bootstrap_schema, SqliteTasteStore};
use echogallery_taste::application::handlers::taste::{GetProfileHandler, SubmitQuizHandler};
use echogallery_taste::config::AppConfig;
use echogallery_taste::ports::{EmbeddingModel, TasteStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let connect_options =
        SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect_with(connect_options)
        .await?;

    if config.database.bootstrap_schema {
        bootstrap_schema(&pool).await?;
        tracing::info!(url = %config.database.url, "database schema ready");
    }

    let store: Arc<dyn TasteStore> = Arc::new(SqliteTasteStore::new(pool));
    let model: Arc<dyn EmbeddingModel> = Arc::new(StubEmbeddingModel::new());

    let handlers = TasteHandlers::new(
        Arc::new(SubmitQuizHandler::new(store.clone(), model)),
        Arc::new(GetProfileHandler::new(store)),
    );

    let cors = {
        let origins = config.server.cors_origins_list();
        if origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let parsed = origins
                .iter()
                .map(|o| o.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()?;
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parsed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = api_router(handlers)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "taste backend listening");

    axum::serve(listener, app).await?;

    Ok(())
}
