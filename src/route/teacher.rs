use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};

use crate::{
    repository::{
        exists::{entity_exists, EntityKind},
        teacher::{
            create_teacher, delete_teacher, get_teacher_by_id, paginate_teachers, update_teacher,
        },
    },
    schema::{
        common::{InternalServerErrorResponse, ListResponse, NotFoundResponse},
        teacher::{
            TeacherCreateRequest, TeacherCreateResponses, TeacherDeleteResponses,
            TeacherDetailResponses, TeacherListResponses, TeacherResponse, TeacherUpdateRequest,
            TeacherUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiTeacherTags {
    Teacher,
}

pub struct ApiTeacher;

#[OpenApi]
impl ApiTeacher {
    #[oai(path = "/teachers", method = "get", tag = "ApiTeacherTags::Teacher")]
    async fn list_teachers_api(
        &self,
        Query(offset): Query<Option<u32>>,
        Query(limit): Query<Option<u32>>,
        state: Data<&Arc<AppState>>,
    ) -> TeacherListResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return TeacherListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.teacher",
                        "list_teachers_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(25).min(100);
        let (data, count) = match paginate_teachers(&mut db, offset, limit).await {
            Ok(val) => val,
            Err(err) => {
                return TeacherListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.teacher",
                        "list_teachers_api",
                        "paginate_teachers",
                        &err.to_string(),
                    ),
                ))
            }
        };

        TeacherListResponses::Ok(Json(ListResponse {
            count,
            results: data
                .iter()
                .map(|x| TeacherResponse {
                    id: x.id,
                    first_name: x.first_name.clone(),
                    last_name: x.last_name.clone(),
                    info: x.info.clone(),
                })
                .collect(),
        }))
    }

    #[oai(path = "/teachers", method = "post", tag = "ApiTeacherTags::Teacher")]
    async fn create_teacher_api(
        &self,
        Json(json): Json<TeacherCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> TeacherCreateResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return TeacherCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.teacher",
                        "create_teacher_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let new_teacher = match create_teacher(&mut db, json.first_name, json.last_name).await {
            Ok(val) => val,
            Err(err) => {
                return TeacherCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.teacher",
                        "create_teacher_api",
                        "create_teacher",
                        &err.to_string(),
                    ),
                ))
            }
        };

        TeacherCreateResponses::Ok(Json(TeacherResponse {
            id: new_teacher.id,
            first_name: new_teacher.first_name,
            last_name: new_teacher.last_name,
            info: new_teacher.info,
        }))
    }

    #[oai(
        path = "/teachers/:teacher_id",
        method = "get",
        tag = "ApiTeacherTags::Teacher"
    )]
    async fn get_detail_teacher_api(
        &self,
        Path(teacher_id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> TeacherDetailResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return TeacherDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.teacher",
                        "get_detail_teacher_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_teacher_by_id(&mut db, teacher_id).await {
            Ok(val) => val,
            Err(err) => {
                return TeacherDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.teacher",
                        "get_detail_teacher_api",
                        "get_teacher_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(data) = data else {
            return TeacherDetailResponses::NotFound(Json(NotFoundResponse {
                message: EntityKind::Teacher.not_found_message(teacher_id),
            }));
        };

        TeacherDetailResponses::Ok(Json(TeacherResponse {
            id: data.id,
            first_name: data.first_name,
            last_name: data.last_name,
            info: data.info,
        }))
    }

    #[oai(
        path = "/teachers/:teacher_id",
        method = "patch",
        tag = "ApiTeacherTags::Teacher"
    )]
    async fn update_teacher_api(
        &self,
        Path(teacher_id): Path<i32>,
        Json(json): Json<TeacherUpdateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> TeacherUpdateResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return TeacherUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.teacher",
                        "update_teacher_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let exists = match entity_exists(&mut db, EntityKind::Teacher, teacher_id).await {
            Ok(val) => val,
            Err(err) => {
                return TeacherUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.teacher",
                        "update_teacher_api",
                        "entity_exists",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if !exists {
            return TeacherUpdateResponses::NotFound(Json(NotFoundResponse {
                message: EntityKind::Teacher.not_found_message(teacher_id),
            }));
        }

        // update_teacher re-reads the untouched info column
        let data = match update_teacher(&mut db, teacher_id, json.first_name, json.last_name).await
        {
            Ok(val) => val,
            Err(err) => {
                return TeacherUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.teacher",
                        "update_teacher_api",
                        "update_teacher",
                        &err.to_string(),
                    ),
                ))
            }
        };

        TeacherUpdateResponses::Ok(Json(TeacherResponse {
            id: data.id,
            first_name: data.first_name,
            last_name: data.last_name,
            info: data.info,
        }))
    }

    #[oai(
        path = "/teachers/:teacher_id",
        method = "delete",
        tag = "ApiTeacherTags::Teacher"
    )]
    async fn delete_teacher_api(
        &self,
        Path(teacher_id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> TeacherDeleteResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return TeacherDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.teacher",
                        "delete_teacher_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let exists = match entity_exists(&mut db, EntityKind::Teacher, teacher_id).await {
            Ok(val) => val,
            Err(err) => {
                return TeacherDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.teacher",
                        "delete_teacher_api",
                        "entity_exists",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if !exists {
            return TeacherDeleteResponses::NotFound(Json(NotFoundResponse {
                message: EntityKind::Teacher.not_found_message(teacher_id),
            }));
        }

        if let Err(err) = delete_teacher(&mut db, teacher_id).await {
            return TeacherDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.teacher",
                    "delete_teacher_api",
                    "delete_teacher",
                    &err.to_string(),
                ),
            ));
        }
        TeacherDeleteResponses::NoContent
    }
}
