use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};

use crate::{
    core::{
        db_errors::{classify_sqlx_error, ProcedureError},
        utils::{date_to_string, parse_date},
    },
    model::schedule_item::ScheduleItemDetail,
    repository::schedule_item::{
        create_schedule_item, delete_schedule_item, paginate_schedule_items,
    },
    schema::{
        common::{
            BadRequestResponse, InternalServerErrorResponse, ListResponse, NotFoundResponse,
        },
        schedule::{
            ScheduleGroup, ScheduleItemCreateRequest, ScheduleItemCreateResponse,
            ScheduleItemCreateResponses, ScheduleItemDeleteResponses, ScheduleItemDetailResponse,
            ScheduleListResponses, ScheduleSubject, ScheduleTeacher,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiScheduleTags {
    Schedule,
}

pub struct ApiSchedule;

pub fn detail_to_response(item: &ScheduleItemDetail) -> ScheduleItemDetailResponse {
    ScheduleItemDetailResponse {
        id: item.id,
        group: ScheduleGroup {
            id: item.group_id,
            name: item.group_name.clone(),
        },
        teacher: ScheduleTeacher {
            id: item.teacher_id,
            first_name: item.teacher_first_name.clone(),
            last_name: item.teacher_last_name.clone(),
        },
        subject: ScheduleSubject {
            id: item.subject_id,
            name: item.subject_name.clone(),
            short_name: item.subject_short_name.clone(),
        },
        date: date_to_string(item.date),
        position: item.position,
        item_type: item.item_type.clone(),
    }
}

#[OpenApi]
impl ApiSchedule {
    #[oai(path = "/schedule", method = "post", tag = "ApiScheduleTags::Schedule")]
    async fn create_schedule_item_api(
        &self,
        Json(json): Json<ScheduleItemCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> ScheduleItemCreateResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return ScheduleItemCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.schedule",
                        "create_schedule_item_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let Some(date) = parse_date(&json.date) else {
            return ScheduleItemCreateResponses::BadRequest(Json(BadRequestResponse {
                message: format!("invalid date: {}", json.date),
            }));
        };

        // The function owns validation and the insert in one atomic call.
        // Its errors come back in two classes: a known domain rejection and
        // everything else.
        let new_id = match create_schedule_item(
            &mut db,
            json.group_id,
            json.teacher_id,
            json.subject_id,
            date,
            json.position,
            &json.item_type,
        )
        .await
        {
            Ok(val) => val,
            Err(err) => {
                return match classify_sqlx_error(&err) {
                    ProcedureError::BusinessRule(message) => {
                        ScheduleItemCreateResponses::BadRequest(Json(BadRequestResponse {
                            message,
                        }))
                    }
                    ProcedureError::Database(message) => {
                        ScheduleItemCreateResponses::InternalServerError(Json(
                            InternalServerErrorResponse::new(
                                "route.schedule",
                                "create_schedule_item_api",
                                "create_schedule_item",
                                &message,
                            ),
                        ))
                    }
                };
            }
        };

        ScheduleItemCreateResponses::Ok(Json(ScheduleItemCreateResponse { id: new_id }))
    }

    #[oai(path = "/schedule", method = "get", tag = "ApiScheduleTags::Schedule")]
    async fn list_schedule_api(
        &self,
        Query(offset): Query<Option<u32>>,
        Query(limit): Query<Option<u32>>,
        state: Data<&Arc<AppState>>,
    ) -> ScheduleListResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return ScheduleListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.schedule",
                        "list_schedule_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(25).min(100);
        let (data, count) = match paginate_schedule_items(&mut db, offset, limit).await {
            Ok(val) => val,
            Err(err) => {
                return ScheduleListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.schedule",
                        "list_schedule_api",
                        "paginate_schedule_items",
                        &err.to_string(),
                    ),
                ))
            }
        };

        ScheduleListResponses::Ok(Json(ListResponse {
            count,
            results: data.iter().map(detail_to_response).collect(),
        }))
    }

    #[oai(
        path = "/schedule/:schedule_item_id",
        method = "delete",
        tag = "ApiScheduleTags::Schedule"
    )]
    async fn delete_schedule_item_api(
        &self,
        Path(schedule_item_id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> ScheduleItemDeleteResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return ScheduleItemDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.schedule",
                        "delete_schedule_item_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let deleted = match delete_schedule_item(&mut db, schedule_item_id).await {
            Ok(val) => val,
            Err(err) => {
                return ScheduleItemDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.schedule",
                        "delete_schedule_item_api",
                        "delete_schedule_item",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if deleted == 0 {
            return ScheduleItemDeleteResponses::NotFound(Json(NotFoundResponse {
                message: format!("schedule item with id = {} not found", schedule_item_id),
            }));
        }
        ScheduleItemDeleteResponses::NoContent
    }
}
