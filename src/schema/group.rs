use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::{
    common::{InternalServerErrorResponse, ListResponse, NotFoundResponse},
    schedule::ScheduleItemDetailResponse,
};

#[derive(Object, Deserialize, Serialize)]
pub struct GroupResponse {
    pub id: i32,
    pub name: String,
}

#[derive(ApiResponse)]
pub enum GroupListResponses {
    #[oai(status = 200)]
    Ok(Json<ListResponse<GroupResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct GroupCreateRequest {
    pub name: String,
}

#[derive(ApiResponse)]
pub enum GroupCreateResponses {
    #[oai(status = 201)]
    Ok(Json<GroupResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GroupDetailResponses {
    #[oai(status = 200)]
    Ok(Json<GroupResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct GroupUpdateRequest {
    pub name: String,
}

#[derive(ApiResponse)]
pub enum GroupUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<GroupResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GroupDeleteResponses {
    #[oai(status = 204)]
    NoContent,

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GroupScheduleResponses {
    #[oai(status = 200)]
    Ok(Json<Vec<ScheduleItemDetailResponse>>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
