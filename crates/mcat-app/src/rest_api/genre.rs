use crate::error::ApiResult;
use axum::{extract::Path, response::IntoResponse, routing::get, Json};
use http::StatusCode;
#[cfg(feature = "openapi")]
use mcat_dal::genre::Genre;
use mcat_dal::genre::GenreRepository;

reference_api!(Genre);
