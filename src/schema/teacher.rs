use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::{InternalServerErrorResponse, ListResponse, NotFoundResponse};

/// `info` is read-only on the wire, it only ever appears in responses.
#[derive(Object, Deserialize, Serialize)]
pub struct TeacherResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub info: Option<String>,
}

#[derive(ApiResponse)]
pub enum TeacherListResponses {
    #[oai(status = 200)]
    Ok(Json<ListResponse<TeacherResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct TeacherCreateRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(ApiResponse)]
pub enum TeacherCreateResponses {
    #[oai(status = 201)]
    Ok(Json<TeacherResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum TeacherDetailResponses {
    #[oai(status = 200)]
    Ok(Json<TeacherResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct TeacherUpdateRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(ApiResponse)]
pub enum TeacherUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<TeacherResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum TeacherDeleteResponses {
    #[oai(status = 204)]
    NoContent,

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
