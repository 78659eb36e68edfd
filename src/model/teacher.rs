use serde::Deserialize;
use sqlx::FromRow;

pub const TABLE_NAME: &str = "public.teacher";

/// `info` is maintained server-side and is never written through the API.
#[derive(Clone, Debug, Deserialize, FromRow)]
pub struct Teacher {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub info: Option<String>,
}
