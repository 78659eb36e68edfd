use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::{InternalServerErrorResponse, ListResponse, NotFoundResponse};

#[derive(Object, Deserialize, Serialize)]
pub struct SubjectResponse {
    pub id: i32,
    pub name: String,
    pub short_name: String,
}

#[derive(ApiResponse)]
pub enum SubjectListResponses {
    #[oai(status = 200)]
    Ok(Json<ListResponse<SubjectResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct SubjectCreateRequest {
    pub name: String,
    pub short_name: String,
}

#[derive(ApiResponse)]
pub enum SubjectCreateResponses {
    #[oai(status = 201)]
    Ok(Json<SubjectResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum SubjectDetailResponses {
    #[oai(status = 200)]
    Ok(Json<SubjectResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct SubjectUpdateRequest {
    pub name: String,
    pub short_name: String,
}

#[derive(ApiResponse)]
pub enum SubjectUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<SubjectResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum SubjectDeleteResponses {
    #[oai(status = 204)]
    NoContent,

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
