use serde::Deserialize;
use sqlx::FromRow;

pub const TABLE_NAME: &str = r#"public."group""#;

#[derive(Clone, Debug, Deserialize, FromRow)]
pub struct Group {
    pub id: i32,
    pub name: String,
}
