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
        subject::{
            create_subject, delete_subject, get_subject_by_id, paginate_subjects, update_subject,
        },
    },
    schema::{
        common::{InternalServerErrorResponse, ListResponse, NotFoundResponse},
        subject::{
            SubjectCreateRequest, SubjectCreateResponses, SubjectDeleteResponses,
            SubjectDetailResponses, SubjectListResponses, SubjectResponse, SubjectUpdateRequest,
            SubjectUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiSubjectTags {
    Subject,
}

pub struct ApiSubject;

#[OpenApi]
impl ApiSubject {
    #[oai(path = "/subjects", method = "get", tag = "ApiSubjectTags::Subject")]
    async fn list_subjects_api(
        &self,
        Query(offset): Query<Option<u32>>,
        Query(limit): Query<Option<u32>>,
        state: Data<&Arc<AppState>>,
    ) -> SubjectListResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return SubjectListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.subject",
                        "list_subjects_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(25).min(100);
        let (data, count) = match paginate_subjects(&mut db, offset, limit).await {
            Ok(val) => val,
            Err(err) => {
                return SubjectListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.subject",
                        "list_subjects_api",
                        "paginate_subjects",
                        &err.to_string(),
                    ),
                ))
            }
        };

        SubjectListResponses::Ok(Json(ListResponse {
            count,
            results: data
                .iter()
                .map(|x| SubjectResponse {
                    id: x.id,
                    name: x.name.clone(),
                    short_name: x.short_name.clone(),
                })
                .collect(),
        }))
    }

    #[oai(path = "/subjects", method = "post", tag = "ApiSubjectTags::Subject")]
    async fn create_subject_api(
        &self,
        Json(json): Json<SubjectCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> SubjectCreateResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return SubjectCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.subject",
                        "create_subject_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let new_subject = match create_subject(&mut db, json.name, json.short_name).await {
            Ok(val) => val,
            Err(err) => {
                return SubjectCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.subject",
                        "create_subject_api",
                        "create_subject",
                        &err.to_string(),
                    ),
                ))
            }
        };

        SubjectCreateResponses::Ok(Json(SubjectResponse {
            id: new_subject.id,
            name: new_subject.name,
            short_name: new_subject.short_name,
        }))
    }

    #[oai(
        path = "/subjects/:subject_id",
        method = "get",
        tag = "ApiSubjectTags::Subject"
    )]
    async fn get_detail_subject_api(
        &self,
        Path(subject_id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> SubjectDetailResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return SubjectDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.subject",
                        "get_detail_subject_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_subject_by_id(&mut db, subject_id).await {
            Ok(val) => val,
            Err(err) => {
                return SubjectDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.subject",
                        "get_detail_subject_api",
                        "get_subject_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(data) = data else {
            return SubjectDetailResponses::NotFound(Json(NotFoundResponse {
                message: EntityKind::Subject.not_found_message(subject_id),
            }));
        };

        SubjectDetailResponses::Ok(Json(SubjectResponse {
            id: data.id,
            name: data.name,
            short_name: data.short_name,
        }))
    }

    #[oai(
        path = "/subjects/:subject_id",
        method = "patch",
        tag = "ApiSubjectTags::Subject"
    )]
    async fn update_subject_api(
        &self,
        Path(subject_id): Path<i32>,
        Json(json): Json<SubjectUpdateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> SubjectUpdateResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return SubjectUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.subject",
                        "update_subject_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let exists = match entity_exists(&mut db, EntityKind::Subject, subject_id).await {
            Ok(val) => val,
            Err(err) => {
                return SubjectUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.subject",
                        "update_subject_api",
                        "entity_exists",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if !exists {
            return SubjectUpdateResponses::NotFound(Json(NotFoundResponse {
                message: EntityKind::Subject.not_found_message(subject_id),
            }));
        }

        let data = match update_subject(&mut db, subject_id, json.name, json.short_name).await {
            Ok(val) => val,
            Err(err) => {
                return SubjectUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.subject",
                        "update_subject_api",
                        "update_subject",
                        &err.to_string(),
                    ),
                ))
            }
        };

        SubjectUpdateResponses::Ok(Json(SubjectResponse {
            id: data.id,
            name: data.name,
            short_name: data.short_name,
        }))
    }

    #[oai(
        path = "/subjects/:subject_id",
        method = "delete",
        tag = "ApiSubjectTags::Subject"
    )]
    async fn delete_subject_api(
        &self,
        Path(subject_id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> SubjectDeleteResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return SubjectDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.subject",
                        "delete_subject_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let exists = match entity_exists(&mut db, EntityKind::Subject, subject_id).await {
            Ok(val) => val,
            Err(err) => {
                return SubjectDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.subject",
                        "delete_subject_api",
                        "entity_exists",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if !exists {
            return SubjectDeleteResponses::NotFound(Json(NotFoundResponse {
                message: EntityKind::Subject.not_found_message(subject_id),
            }));
        }

        if let Err(err) = delete_subject(&mut db, subject_id).await {
            return SubjectDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.subject",
                    "delete_subject_api",
                    "delete_subject",
                    &err.to_string(),
                ),
            ));
        }
        SubjectDeleteResponses::NoContent
    }
}
