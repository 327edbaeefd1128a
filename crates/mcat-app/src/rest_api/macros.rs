/// Read only API for reference entity (list all and get one)
macro_rules! reference_api {
    ($entity:ident) => {
        paste::paste! {
            crate::repository_from_request!([<$entity Repository>]);

            #[cfg_attr(feature = "openapi",  utoipa::path(get, path = "", tag = stringify!($entity), operation_id = concat!("list", stringify!($entity)),
            responses((status = StatusCode::OK, description = "List all, sorted by id", body = Vec<$entity>))))]
            pub async fn [<list_ $entity:snake s>](
                repository: [<$entity Repository>],
            ) -> ApiResult<impl IntoResponse> {
                let records = repository.list().await?;
                Ok((StatusCode::OK, Json(records)))
            }

            #[cfg_attr(feature = "openapi",  utoipa::path(get, path = "/{id}", tag = stringify!($entity), operation_id = concat!("get", stringify!($entity)),
            responses((status = StatusCode::OK, description = "Get one", body = $entity),
            (status = StatusCode::NOT_FOUND, description = "Not found"))))]
            pub async fn [<get_ $entity:snake>](
                Path(id): Path<i64>,
                repository: [<$entity Repository>],
            ) -> ApiResult<impl IntoResponse> {
                let record = repository.get(id).await?;
                Ok((StatusCode::OK, Json(record)))
            }

            pub fn router() -> axum::Router<crate::state::AppState> {
                axum::Router::new()
                    .route("/", get([<list_ $entity:snake s>]))
                    .route("/{id}", get([<get_ $entity:snake>]))
            }

            #[cfg(feature = "openapi")]
            pub fn api_docs() -> utoipa::openapi::OpenApi {
                #[derive(utoipa::OpenApi)]
                #[openapi(paths([<list_ $entity:snake s>], [<get_ $entity:snake>]))]
                struct ApiDocs;

                use utoipa::OpenApi as _;
                ApiDocs::openapi()
            }
        }
    };
}
