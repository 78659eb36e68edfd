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
        group::{create_group, delete_group, get_group_by_id, paginate_groups, update_group},
        schedule_item::get_current_month_schedule,
    },
    route::schedule::detail_to_response,
    schema::{
        common::{InternalServerErrorResponse, ListResponse, NotFoundResponse},
        group::{
            GroupCreateRequest, GroupCreateResponses, GroupDeleteResponses, GroupDetailResponses,
            GroupListResponses, GroupResponse, GroupScheduleResponses, GroupUpdateRequest,
            GroupUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiGroupTags {
    Group,
}

pub struct ApiGroup;

#[OpenApi]
impl ApiGroup {
    #[oai(path = "/groups", method = "get", tag = "ApiGroupTags::Group")]
    async fn list_groups_api(
        &self,
        Query(offset): Query<Option<u32>>,
        Query(limit): Query<Option<u32>>,
        state: Data<&Arc<AppState>>,
    ) -> GroupListResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return GroupListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "list_groups_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let offset = offset.unwrap_or(0);
        // limits above 100 are capped, not rejected
        let limit = limit.unwrap_or(25).min(100);
        let (data, count) = match paginate_groups(&mut db, offset, limit).await {
            Ok(val) => val,
            Err(err) => {
                return GroupListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "list_groups_api",
                        "paginate_groups",
                        &err.to_string(),
                    ),
                ))
            }
        };

        GroupListResponses::Ok(Json(ListResponse {
            count,
            results: data
                .iter()
                .map(|x| GroupResponse {
                    id: x.id,
                    name: x.name.clone(),
                })
                .collect(),
        }))
    }

    #[oai(path = "/groups", method = "post", tag = "ApiGroupTags::Group")]
    async fn create_group_api(
        &self,
        Json(json): Json<GroupCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> GroupCreateResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return GroupCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "create_group_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let new_group = match create_group(&mut db, json.name).await {
            Ok(val) => val,
            Err(err) => {
                return GroupCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "create_group_api",
                        "create_group",
                        &err.to_string(),
                    ),
                ))
            }
        };

        GroupCreateResponses::Ok(Json(GroupResponse {
            id: new_group.id,
            name: new_group.name,
        }))
    }

    #[oai(path = "/groups/:group_id", method = "get", tag = "ApiGroupTags::Group")]
    async fn get_detail_group_api(
        &self,
        Path(group_id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> GroupDetailResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return GroupDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "get_detail_group_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_group_by_id(&mut db, group_id).await {
            Ok(val) => val,
            Err(err) => {
                return GroupDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "get_detail_group_api",
                        "get_group_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(data) = data else {
            return GroupDetailResponses::NotFound(Json(NotFoundResponse {
                message: EntityKind::Group.not_found_message(group_id),
            }));
        };

        GroupDetailResponses::Ok(Json(GroupResponse {
            id: data.id,
            name: data.name,
        }))
    }

    #[oai(path = "/groups/:group_id", method = "patch", tag = "ApiGroupTags::Group")]
    async fn update_group_api(
        &self,
        Path(group_id): Path<i32>,
        Json(json): Json<GroupUpdateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> GroupUpdateResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return GroupUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "update_group_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        // 404 before any write
        let exists = match entity_exists(&mut db, EntityKind::Group, group_id).await {
            Ok(val) => val,
            Err(err) => {
                return GroupUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "update_group_api",
                        "entity_exists",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if !exists {
            return GroupUpdateResponses::NotFound(Json(NotFoundResponse {
                message: EntityKind::Group.not_found_message(group_id),
            }));
        }

        let data = match update_group(&mut db, group_id, json.name).await {
            Ok(val) => val,
            Err(err) => {
                return GroupUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "update_group_api",
                        "update_group",
                        &err.to_string(),
                    ),
                ))
            }
        };

        GroupUpdateResponses::Ok(Json(GroupResponse {
            id: data.id,
            name: data.name,
        }))
    }

    #[oai(path = "/groups/:group_id", method = "delete", tag = "ApiGroupTags::Group")]
    async fn delete_group_api(
        &self,
        Path(group_id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> GroupDeleteResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return GroupDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "delete_group_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let exists = match entity_exists(&mut db, EntityKind::Group, group_id).await {
            Ok(val) => val,
            Err(err) => {
                return GroupDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "delete_group_api",
                        "entity_exists",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if !exists {
            return GroupDeleteResponses::NotFound(Json(NotFoundResponse {
                message: EntityKind::Group.not_found_message(group_id),
            }));
        }

        if let Err(err) = delete_group(&mut db, group_id).await {
            return GroupDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.group",
                    "delete_group_api",
                    "delete_group",
                    &err.to_string(),
                ),
            ));
        }
        GroupDeleteResponses::NoContent
    }

    #[oai(
        path = "/groups/:group_id/schedule",
        method = "get",
        tag = "ApiGroupTags::Group"
    )]
    async fn get_group_schedule_api(
        &self,
        Path(group_id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> GroupScheduleResponses {
        let mut db = match state.db.acquire().await {
            Ok(val) => val,
            Err(err) => {
                return GroupScheduleResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "get_group_schedule_api",
                        "acquire connection",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let exists = match entity_exists(&mut db, EntityKind::Group, group_id).await {
            Ok(val) => val,
            Err(err) => {
                return GroupScheduleResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "get_group_schedule_api",
                        "entity_exists",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if !exists {
            return GroupScheduleResponses::NotFound(Json(NotFoundResponse {
                message: EntityKind::Group.not_found_message(group_id),
            }));
        }

        let data = match get_current_month_schedule(&mut db, group_id).await {
            Ok(val) => val,
            Err(err) => {
                return GroupScheduleResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.group",
                        "get_group_schedule_api",
                        "get_current_month_schedule",
                        &err.to_string(),
                    ),
                ))
            }
        };

        GroupScheduleResponses::Ok(Json(data.iter().map(detail_to_response).collect()))
    }
}
