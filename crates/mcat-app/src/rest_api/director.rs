use crate::error::ApiResult;
use axum::{extract::Path, response::IntoResponse, routing::get, Json};
use http::StatusCode;
#[cfg(feature = "openapi")]
use mcat_dal::director::Director;
use mcat_dal::director::DirectorRepository;

reference_api!(Director);
