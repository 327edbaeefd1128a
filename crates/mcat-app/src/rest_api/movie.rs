use crate::{error::ApiResult, repository_from_request, state::AppState};
use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::get,
    Json,
};
use http::StatusCode;
#[cfg(feature = "openapi")]
use mcat_dal::movie::{Movie, MovieDetail};
use mcat_dal::movie::{MovieFields, MovieFilter, MovieRepository};
use tracing::{debug, Level};

repository_from_request!(MovieRepository);

#[cfg_attr(feature = "openapi",  utoipa::path(get, path = "", tag = "Movie", operation_id = "listMovie",
    params(MovieFilter),
    responses((status = StatusCode::OK, description = "Movies with resolved genre and director", body = Vec<MovieDetail>))))]
pub async fn list_movies(
    repository: MovieRepository,
    Query(filter): Query<MovieFilter>,
) -> ApiResult<impl IntoResponse> {
    let movies = repository.list(&filter).await?;
    if tracing::enabled!(Level::DEBUG) {
        let total = repository.count(&MovieFilter::default()).await?;
        debug!("Movie filter {:?} matched {} of {} movies", filter, movies.len(), total);
    }
    Ok((StatusCode::OK, Json(movies)))
}

#[cfg_attr(feature = "openapi",  utoipa::path(post, path = "", tag = "Movie", operation_id = "createMovie",
    request_body = MovieFields,
    responses((status = StatusCode::CREATED, description = "Created Movie", body = Movie))))]
pub async fn create_movie(
    repository: MovieRepository,
    Json(payload): Json<MovieFields>,
) -> ApiResult<impl IntoResponse> {
    let record = repository.create(payload).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

#[cfg_attr(feature = "openapi",  utoipa::path(get, path = "/{id}", tag = "Movie", operation_id = "getMovie",
    responses((status = StatusCode::OK, description = "Movie with resolved genre and director", body = MovieDetail),
    (status = StatusCode::NOT_FOUND, description = "Not found"))))]
pub async fn get_movie(
    Path(id): Path<i64>,
    repository: MovieRepository,
) -> ApiResult<impl IntoResponse> {
    let record = repository.get(id).await?;

    Ok((StatusCode::OK, Json(record)))
}

#[cfg_attr(feature = "openapi",  utoipa::path(put, path = "/{id}", tag = "Movie", operation_id = "replaceMovie",
    request_body = MovieFields,
    responses((status = StatusCode::NO_CONTENT, description = "Replaced all fields"),
    (status = StatusCode::BAD_REQUEST, description = "Some field is missing"),
    (status = StatusCode::NOT_FOUND, description = "Not found"))))]
pub async fn replace_movie(
    Path(id): Path<i64>,
    repository: MovieRepository,
    Json(payload): Json<MovieFields>,
) -> ApiResult<impl IntoResponse> {
    repository.replace(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg_attr(feature = "openapi",  utoipa::path(patch, path = "/{id}", tag = "Movie", operation_id = "updateMovie",
    request_body = MovieFields,
    responses((status = StatusCode::NO_CONTENT, description = "Updated present fields"),
    (status = StatusCode::NOT_FOUND, description = "Not found"))))]
pub async fn update_movie(
    Path(id): Path<i64>,
    repository: MovieRepository,
    Json(payload): Json<MovieFields>,
) -> ApiResult<impl IntoResponse> {
    repository.merge(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg_attr(feature = "openapi",  utoipa::path(delete, path = "/{id}", tag = "Movie", operation_id = "deleteMovie",
    responses((status = StatusCode::NO_CONTENT, description = "Deleted"),
    (status = StatusCode::NOT_FOUND, description = "Not found"))))]
pub async fn delete_movie(
    Path(id): Path<i64>,
    repository: MovieRepository,
) -> ApiResult<impl IntoResponse> {
    repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(list_movies).post(create_movie))
        .route(
            "/{id}",
            get(get_movie)
                .put(replace_movie)
                .patch(update_movie)
                .delete(delete_movie),
        )
}

#[cfg(feature = "openapi")]
pub fn api_docs() -> utoipa::openapi::OpenApi {
    #[derive(utoipa::OpenApi)]
    #[openapi(paths(
        list_movies,
        create_movie,
        get_movie,
        replace_movie,
        update_movie,
        delete_movie
    ))]
    struct ApiDocs;

    use utoipa::OpenApi as _;
    ApiDocs::openapi()
}
