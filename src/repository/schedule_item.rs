use chrono::NaiveDate;
use sqlx::{pool::PoolConnection, Postgres};

use crate::{
    core::sqlx_utils::query_builder,
    model::schedule_item::{
        ScheduleItemDetail, CREATE_FN_NAME, CURRENT_MONTH_FN_NAME, TABLE_NAME,
    },
};

const DETAIL_COLUMNS: &str = r#"s.id, s."date", s."position", s."type" AS item_type,
    g.id AS group_id, g.name AS group_name,
    t.id AS teacher_id, t.first_name AS teacher_first_name, t.last_name AS teacher_last_name,
    sub.id AS subject_id, sub.name AS subject_name, sub.short_name AS subject_short_name"#;

/// Creation goes through the database function so conflict checking and the
/// insert happen in one atomic call. The raw error is handed back for
/// classification in `core::db_errors`.
pub async fn create_schedule_item(
    db: &mut PoolConnection<Postgres>,
    group_id: i32,
    teacher_id: i32,
    subject_id: i32,
    date: NaiveDate,
    position: i32,
    item_type: &str,
) -> Result<i32, sqlx::Error> {
    let row: (i32,) = sqlx::query_as(
        format!("SELECT {}($1, $2, $3, $4, $5, $6)", CREATE_FN_NAME).as_str(),
    )
    .bind(group_id)
    .bind(teacher_id)
    .bind(subject_id)
    .bind(date)
    .bind(position)
    .bind(item_type)
    .fetch_one(&mut **db)
    .await?;
    Ok(row.0)
}

pub async fn paginate_schedule_items(
    db: &mut PoolConnection<Postgres>,
    offset: u32,
    limit: u32,
) -> anyhow::Result<(Vec<ScheduleItemDetail>, i64)> {
    let stmt = format!(
        r#"SELECT {columns}
        FROM {table} s
        JOIN {group_table} g ON g.id = s.group_id
        JOIN {teacher_table} t ON t.id = s.teacher_id
        JOIN {subject_table} sub ON sub.id = s.subject_id
        ORDER BY s.id ASC
        LIMIT $1 OFFSET $2"#,
        columns = DETAIL_COLUMNS,
        table = TABLE_NAME,
        group_table = crate::model::group::TABLE_NAME,
        teacher_table = crate::model::teacher::TABLE_NAME,
        subject_table = crate::model::subject::TABLE_NAME,
    );
    let data: Vec<ScheduleItemDetail> = sqlx::query_as(&stmt)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&mut **db)
        .await?;

    let stmt_count = query_builder(Some("count(id)".to_string()), TABLE_NAME, &[], vec![], None, None);
    let count: (i64,) = sqlx::query_as(&stmt_count).fetch_one(&mut **db).await?;
    Ok((data, count.0))
}

/// Current-month view for one group. The date window is computed entirely by
/// the database function, ordered by date ascending.
pub async fn get_current_month_schedule(
    db: &mut PoolConnection<Postgres>,
    group_id: i32,
) -> anyhow::Result<Vec<ScheduleItemDetail>> {
    let stmt = format!(
        r#"SELECT {columns}
        FROM {month_fn}($1) s
        JOIN {group_table} g ON g.id = s.group_id
        JOIN {teacher_table} t ON t.id = s.teacher_id
        JOIN {subject_table} sub ON sub.id = s.subject_id
        ORDER BY s."date" ASC, s."position" ASC"#,
        columns = DETAIL_COLUMNS,
        month_fn = CURRENT_MONTH_FN_NAME,
        group_table = crate::model::group::TABLE_NAME,
        teacher_table = crate::model::teacher::TABLE_NAME,
        subject_table = crate::model::subject::TABLE_NAME,
    );
    let data: Vec<ScheduleItemDetail> = sqlx::query_as(&stmt)
        .bind(group_id)
        .fetch_all(&mut **db)
        .await?;
    Ok(data)
}

pub async fn delete_schedule_item(
    db: &mut PoolConnection<Postgres>,
    id: i32,
) -> anyhow::Result<u64> {
    let res = sqlx::query(format!("DELETE FROM {} WHERE id = $1", TABLE_NAME).as_str())
        .bind(id)
        .execute(&mut **db)
        .await?;
    Ok(res.rows_affected())
}
