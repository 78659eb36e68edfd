use poem_openapi::{
    types::{ParseFromJSON, ToJSON},
    Object,
};
use serde::Deserialize;

#[derive(Object, Deserialize)]
pub struct NotFoundResponse {
    pub message: String,
}

#[derive(Object, Deserialize)]
pub struct BadRequestResponse {
    pub message: String,
}

#[derive(Object, Deserialize)]
pub struct InternalServerErrorResponse {
    pub message: String,
}

impl InternalServerErrorResponse {
    pub fn new(module: &str, function: &str, step: &str, error: &str) -> Self {
        Self {
            message: format!("error on {}.{} at {}: {}", module, function, step, error),
        }
    }
}

/// Converged list envelope: `count` is the unfiltered total row count,
/// `results` the current page.
#[derive(Object, Deserialize)]
pub struct ListResponse<T: ParseFromJSON + ToJSON> {
    pub count: i64,
    pub results: Vec<T>,
}
