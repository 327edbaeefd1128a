#[macro_use]
mod macros;

pub mod director;
pub mod genre;
pub mod movie;

use crate::state::AppState;

/// All catalog resources, ready to be served with [`AppState`].
pub fn api_router() -> axum::Router<AppState> {
    axum::Router::new()
        .nest("/movies", movie::router())
        .nest("/directors", director::router())
        .nest("/genres", genre::router())
}

#[cfg(feature = "openapi")]
pub fn api_docs() -> utoipa::openapi::OpenApi {
    #[derive(utoipa::OpenApi)]
    #[openapi(info(title = "Movie catalog"))]
    struct ApiDocs;

    use utoipa::OpenApi as _;
    ApiDocs::openapi()
        .nest("/movies", movie::api_docs())
        .nest("/directors", director::api_docs())
        .nest("/genres", genre::api_docs())
}
