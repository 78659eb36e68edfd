use sqlx::{pool::PoolConnection, Postgres};

use crate::{
    core::sqlx_utils::{binds_query_as, query_builder, SqlxBinds},
    model::subject::{Subject, TABLE_NAME},
};

pub async fn paginate_subjects(
    db: &mut PoolConnection<Postgres>,
    offset: u32,
    limit: u32,
) -> anyhow::Result<(Vec<Subject>, i64)> {
    let stmt = query_builder(
        None,
        TABLE_NAME,
        &[],
        vec!["id ASC".to_string()],
        Some(limit),
        Some(offset),
    );
    let stmt_count = query_builder(Some("count(id)".to_string()), TABLE_NAME, &[], vec![], None, None);

    let data = binds_query_as::<Subject>(&stmt, vec![]).fetch_all(&mut **db).await?;
    let count: (i64,) = binds_query_as(&stmt_count, vec![]).fetch_one(&mut **db).await?;
    Ok((data, count.0))
}

pub async fn get_subject_by_id(
    db: &mut PoolConnection<Postgres>,
    id: i32,
) -> anyhow::Result<Option<Subject>> {
    let binds = vec![SqlxBinds::Int(id)];
    let stmt = query_builder(None, TABLE_NAME, &["id = $1".to_string()], vec![], None, None);
    let data = binds_query_as::<Subject>(&stmt, binds)
        .fetch_optional(&mut **db)
        .await?;
    Ok(data)
}

pub async fn create_subject(
    db: &mut PoolConnection<Postgres>,
    name: String,
    short_name: String,
) -> anyhow::Result<Subject> {
    let row: (i32,) = sqlx::query_as(
        format!(
            "INSERT INTO {} (name, short_name) VALUES ($1, $2) RETURNING id",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&name)
    .bind(&short_name)
    .fetch_one(&mut **db)
    .await?;
    Ok(Subject {
        id: row.0,
        name,
        short_name,
    })
}

pub async fn update_subject(
    db: &mut PoolConnection<Postgres>,
    id: i32,
    name: String,
    short_name: String,
) -> anyhow::Result<Subject> {
    sqlx::query(
        format!(
            "UPDATE {} SET name = $1, short_name = $2 WHERE id = $3",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&name)
    .bind(&short_name)
    .bind(id)
    .execute(&mut **db)
    .await?;
    Ok(Subject {
        id,
        name,
        short_name,
    })
}

pub async fn delete_subject(db: &mut PoolConnection<Postgres>, id: i32) -> anyhow::Result<u64> {
    let res = sqlx::query(format!("DELETE FROM {} WHERE id = $1", TABLE_NAME).as_str())
        .bind(id)
        .execute(&mut **db)
        .await?;
    Ok(res.rows_affected())
}
