use std::sync::Arc;

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use poem::{http::StatusCode, test::TestClient};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    core::{test_utils::test_config, utils::date_to_string},
    factory::{
        group::GroupFactory, schedule_item::ScheduleItemFactory, subject::SubjectFactory,
        teacher::TeacherFactory,
    },
    init_openapi_route,
    model::{
        group::TABLE_NAME,
        schedule_item::ScheduleItem,
    },
    schema::{
        common::{ListResponse, NotFoundResponse},
        group::GroupResponse,
        schedule::ScheduleItemDetailResponse,
    },
    AppState,
};

#[derive(Clone)]
struct ScheduleExt {
    pub group_id: i32,
    pub teacher_id: i32,
    pub subject_id: i32,
    pub date: NaiveDate,
    pub position: i32,
}

#[sqlx::test]
async fn test_list_groups_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    GroupFactory::new()
        .generate_many(&app_state.db, 3, ())
        .await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/groups").send().await;

    // Expect
    resp.assert_status(StatusCode::OK);
    let body: ListResponse<GroupResponse> = resp.json().await.value().deserialize();
    assert_eq!(body.count, 3);
    assert_eq!(body.results.len(), 3);
    for pair in body.results.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
    Ok(())
}

#[sqlx::test]
async fn test_list_groups_api_clamps_limit(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    GroupFactory::new()
        .generate_many(&app_state.db, 120, ())
        .await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/groups").query("limit", &150).send().await;

    // Expect: limit capped at 100, count still the full total
    resp.assert_status(StatusCode::OK);
    let body: ListResponse<GroupResponse> = resp.json().await.value().deserialize();
    assert_eq!(body.results.len(), 100);
    assert_eq!(body.count, 120);
    Ok(())
}

#[sqlx::test]
async fn test_list_groups_api_offset(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let groups = GroupFactory::new()
        .generate_many(&app_state.db, 30, ())
        .await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/groups").query("offset", &28).send().await;

    // Expect
    resp.assert_status(StatusCode::OK);
    let body: ListResponse<GroupResponse> = resp.json().await.value().deserialize();
    assert_eq!(body.count, 30);
    assert_eq!(body.results.len(), 2);
    assert_eq!(body.results[0].id, groups[28].id);
    Ok(())
}

#[sqlx::test]
async fn test_create_group_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .post("/api/groups")
        .body_json(&json!({"name": "KN-21"}))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::CREATED);
    let body: GroupResponse = resp.json().await.value().deserialize();
    assert_eq!(body.name, "KN-21".to_string());
    let row: Option<(String,)> =
        sqlx::query_as(format!("SELECT name FROM {} WHERE id = $1", TABLE_NAME).as_str())
            .bind(body.id)
            .fetch_optional(&app_state.db)
            .await?;
    assert_eq!(row, Some(("KN-21".to_string(),)));
    Ok(())
}

#[sqlx::test]
async fn test_get_detail_group_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let group = GroupFactory::new().generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get(format!("/api/groups/{}", group.id)).send().await;

    // Expect
    resp.assert_status(StatusCode::OK);
    let body: GroupResponse = resp.json().await.value().deserialize();
    assert_eq!(body.id, group.id);
    assert_eq!(body.name, group.name);
    Ok(())
}

#[sqlx::test]
async fn test_get_detail_group_api_not_found(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/groups/999999").send().await;

    // Expect
    resp.assert_status(StatusCode::NOT_FOUND);
    let body: NotFoundResponse = resp.json().await.value().deserialize();
    assert_eq!(body.message, "group with id = 999999 not found".to_string());
    Ok(())
}

#[sqlx::test]
async fn test_update_group_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let group = GroupFactory::new().generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .patch(format!("/api/groups/{}", group.id))
        .body_json(&json!({"name": "KN-22"}))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::OK);
    let body: GroupResponse = resp.json().await.value().deserialize();
    assert_eq!(body.id, group.id);
    assert_eq!(body.name, "KN-22".to_string());
    let row: (String,) =
        sqlx::query_as(format!("SELECT name FROM {} WHERE id = $1", TABLE_NAME).as_str())
            .bind(group.id)
            .fetch_one(&app_state.db)
            .await?;
    assert_eq!(row.0, "KN-22".to_string());
    Ok(())
}

#[sqlx::test]
async fn test_update_group_api_not_found(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .patch("/api/groups/999999")
        .body_json(&json!({"name": "KN-22"}))
        .send()
        .await;

    // Expect: 404 and nothing written
    resp.assert_status(StatusCode::NOT_FOUND);
    let num_data: (i64,) = sqlx::query_as(
        format!("SELECT COUNT(*) FROM {} WHERE name = $1", TABLE_NAME).as_str(),
    )
    .bind("KN-22")
    .fetch_one(&app_state.db)
    .await?;
    assert_eq!(num_data.0, 0);
    Ok(())
}

#[sqlx::test]
async fn test_delete_group_api_twice(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let group = GroupFactory::new().generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let first = cli.delete(format!("/api/groups/{}", group.id)).send().await;
    let second = cli.delete(format!("/api/groups/{}", group.id)).send().await;

    // Expect
    first.assert_status(StatusCode::NO_CONTENT);
    second.assert_status(StatusCode::NOT_FOUND);
    let num_data: (i64,) =
        sqlx::query_as(format!("SELECT COUNT(*) FROM {} WHERE id = $1", TABLE_NAME).as_str())
            .bind(group.id)
            .fetch_one(&app_state.db)
            .await?;
    assert_eq!(num_data.0, 0);
    Ok(())
}

#[sqlx::test]
async fn test_get_group_schedule_api_current_month_window(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let group = GroupFactory::new().generate_one(&app_state.db, ()).await?;
    let other_group = GroupFactory::new().generate_one(&app_state.db, ()).await?;
    let teacher = TeacherFactory::new().generate_one(&app_state.db, ()).await?;
    let subject = SubjectFactory::new().generate_one(&app_state.db, ()).await?;

    let today = Local::now().date_naive();
    let first_day = today.with_day(1).unwrap();
    let last_day = first_day
        .checked_add_months(Months::new(1))
        .unwrap()
        .checked_sub_days(Days::new(1))
        .unwrap();

    let mut factory = ScheduleItemFactory::<ScheduleExt>::new();
    factory.modified_one(|data, ext| ScheduleItem {
        group_id: ext.group_id,
        teacher_id: ext.teacher_id,
        subject_id: ext.subject_id,
        date: ext.date,
        position: ext.position,
        ..data.clone()
    });
    let ext = ScheduleExt {
        group_id: group.id,
        teacher_id: teacher.id,
        subject_id: subject.id,
        date: first_day,
        position: 1,
    };
    // inside the month, on both boundaries
    factory
        .generate_one(&app_state.db, ScheduleExt { date: last_day, position: 2, ..ext.clone() })
        .await?;
    factory.generate_one(&app_state.db, ext.clone()).await?;
    // just outside both boundaries
    factory
        .generate_one(
            &app_state.db,
            ScheduleExt {
                date: first_day.checked_sub_days(Days::new(1)).unwrap(),
                position: 3,
                ..ext.clone()
            },
        )
        .await?;
    factory
        .generate_one(
            &app_state.db,
            ScheduleExt {
                date: last_day.checked_add_days(Days::new(1)).unwrap(),
                position: 4,
                ..ext.clone()
            },
        )
        .await?;
    // in the month, but another group
    factory
        .generate_one(
            &app_state.db,
            ScheduleExt {
                group_id: other_group.id,
                position: 5,
                ..ext.clone()
            },
        )
        .await?;

    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .get(format!("/api/groups/{}/schedule", group.id))
        .send()
        .await;

    // Expect: only the two in-month items for this group, date ascending
    resp.assert_status(StatusCode::OK);
    let body: Vec<ScheduleItemDetailResponse> = resp.json().await.value().deserialize();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0].date, date_to_string(first_day));
    assert_eq!(body[1].date, date_to_string(last_day));
    for item in &body {
        assert_eq!(item.group.id, group.id);
        assert_eq!(item.teacher.first_name, teacher.first_name);
        assert_eq!(item.subject.short_name, subject.short_name);
    }
    Ok(())
}

#[sqlx::test]
async fn test_get_group_schedule_api_not_found(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/groups/999999/schedule").send().await;

    // Expect
    resp.assert_status(StatusCode::NOT_FOUND);
    Ok(())
}
