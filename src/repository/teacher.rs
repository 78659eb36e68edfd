use sqlx::{pool::PoolConnection, Postgres};

use crate::{
    core::sqlx_utils::{binds_query_as, query_builder, SqlxBinds},
    model::teacher::{Teacher, TABLE_NAME},
};

pub async fn paginate_teachers(
    db: &mut PoolConnection<Postgres>,
    offset: u32,
    limit: u32,
) -> anyhow::Result<(Vec<Teacher>, i64)> {
    let stmt = query_builder(
        None,
        TABLE_NAME,
        &[],
        vec!["id ASC".to_string()],
        Some(limit),
        Some(offset),
    );
    let stmt_count = query_builder(Some("count(id)".to_string()), TABLE_NAME, &[], vec![], None, None);

    let data = binds_query_as::<Teacher>(&stmt, vec![]).fetch_all(&mut **db).await?;
    let count: (i64,) = binds_query_as(&stmt_count, vec![]).fetch_one(&mut **db).await?;
    Ok((data, count.0))
}

pub async fn get_teacher_by_id(
    db: &mut PoolConnection<Postgres>,
    id: i32,
) -> anyhow::Result<Option<Teacher>> {
    let binds = vec![SqlxBinds::Int(id)];
    let stmt = query_builder(None, TABLE_NAME, &["id = $1".to_string()], vec![], None, None);
    let data = binds_query_as::<Teacher>(&stmt, binds)
        .fetch_optional(&mut **db)
        .await?;
    Ok(data)
}

/// `info` is never part of the insert, a new teacher always starts with null.
pub async fn create_teacher(
    db: &mut PoolConnection<Postgres>,
    first_name: String,
    last_name: String,
) -> anyhow::Result<Teacher> {
    let row: (i32,) = sqlx::query_as(
        format!(
            "INSERT INTO {} (first_name, last_name) VALUES ($1, $2) RETURNING id",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&first_name)
    .bind(&last_name)
    .fetch_one(&mut **db)
    .await?;
    Ok(Teacher {
        id: row.0,
        first_name,
        last_name,
        info: None,
    })
}

/// Replaces the editable fields and re-reads the server-managed `info`
/// so the caller can report its current value.
pub async fn update_teacher(
    db: &mut PoolConnection<Postgres>,
    id: i32,
    first_name: String,
    last_name: String,
) -> anyhow::Result<Teacher> {
    sqlx::query(
        format!(
            "UPDATE {} SET first_name = $1, last_name = $2 WHERE id = $3",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&first_name)
    .bind(&last_name)
    .bind(id)
    .execute(&mut **db)
    .await?;

    let info: (Option<String>,) =
        sqlx::query_as(format!("SELECT info FROM {} WHERE id = $1", TABLE_NAME).as_str())
            .bind(id)
            .fetch_one(&mut **db)
            .await?;
    Ok(Teacher {
        id,
        first_name,
        last_name,
        info: info.0,
    })
}

pub async fn delete_teacher(db: &mut PoolConnection<Postgres>, id: i32) -> anyhow::Result<u64> {
    let res = sqlx::query(format!("DELETE FROM {} WHERE id = $1", TABLE_NAME).as_str())
        .bind(id)
        .execute(&mut **db)
        .await?;
    Ok(res.rows_affected())
}
