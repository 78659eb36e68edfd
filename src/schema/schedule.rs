use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::{
    BadRequestResponse, InternalServerErrorResponse, ListResponse, NotFoundResponse,
};

#[derive(Object, Deserialize, Serialize)]
pub struct ScheduleGroup {
    pub id: i32,
    pub name: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct ScheduleTeacher {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct ScheduleSubject {
    pub id: i32,
    pub name: String,
    pub short_name: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct ScheduleItemDetailResponse {
    pub id: i32,
    pub group: ScheduleGroup,
    pub teacher: ScheduleTeacher,
    pub subject: ScheduleSubject,
    pub date: String,
    pub position: i32,
    #[oai(rename = "type")]
    #[serde(rename = "type")]
    pub item_type: String,
}

#[derive(ApiResponse)]
pub enum ScheduleListResponses {
    #[oai(status = 200)]
    Ok(Json<ListResponse<ScheduleItemDetailResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct ScheduleItemCreateRequest {
    pub group_id: i32,
    pub teacher_id: i32,
    pub subject_id: i32,
    pub date: String,
    pub position: i32,
    #[oai(rename = "type")]
    #[serde(rename = "type")]
    pub item_type: String,
}

#[derive(Object, Deserialize)]
pub struct ScheduleItemCreateResponse {
    pub id: i32,
}

#[derive(ApiResponse)]
pub enum ScheduleItemCreateResponses {
    #[oai(status = 201)]
    Ok(Json<ScheduleItemCreateResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ScheduleItemDeleteResponses {
    #[oai(status = 204)]
    NoContent,

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
