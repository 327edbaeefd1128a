use crate::config::ServerConfig;
use crate::error::Result;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::{response::IntoResponse, routing::get, Router};
use futures::FutureExt;
use mcat_app::rest_api::api_router;
use mcat_app::state::AppState;
use tower::Layer as _;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

pub async fn run(args: ServerConfig) -> Result<()> {
    let shutdown = tokio::signal::ctrl_c().map(|_| ());
    run_graceful(args, shutdown).await
}

pub async fn run_graceful<S>(args: ServerConfig, shutdown_signal: S) -> Result<()>
where
    S: std::future::Future<Output = ()> + Send + 'static,
{
    let state = build_state(&args).await?;
    let app = main_router(state, &args);

    let ip: std::net::IpAddr = args.listen_address.parse()?;
    let addr = std::net::SocketAddr::from((ip, args.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        axum::ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal)
    .await?;

    info!("Server stopped");
    Ok(())
}

/// `/movies/` and `/movies` are same resource, so trailing slash is trimmed before routing.
fn main_router(state: AppState, args: &ServerConfig) -> NormalizePath<Router> {
    #[allow(unused_mut)]
    let mut router = Router::new()
        .merge(api_router())
        .with_state(state)
        .route("/health", get(health));

    #[cfg(feature = "openapi")]
    {
        router = router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", mcat_app::rest_api::api_docs()),
        );
    }

    let mut router = router.layer(TraceLayer::new_for_http());
    if args.cors {
        router = router.layer(CorsLayer::very_permissive());
    }

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn build_state(config: &ServerConfig) -> Result<AppState> {
    let data_dir = config.data_dir();
    if !data_dir.is_dir() {
        tokio::fs::create_dir_all(&data_dir).await?;
        info!("Created data directory {}", data_dir.display());
    }

    let pool = mcat_dal::new_pool(&config.database_url()).await?;
    debug!("Connected to {}", config.database_url());

    if let Some(seed_file) = &config.seed_file {
        let sql = tokio::fs::read_to_string(seed_file).await?;
        let rows = mcat_dal::seed(&pool, &sql).await?;
        info!("Loaded {rows} rows from {}", seed_file.display());
    }

    Ok(AppState::new(pool))
}
