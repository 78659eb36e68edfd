use serde::Deserialize;
use sqlx::FromRow;

pub const TABLE_NAME: &str = "public.subject";

#[derive(Clone, Debug, Deserialize, FromRow)]
pub struct Subject {
    pub id: i32,
    pub name: String,
    pub short_name: String,
}
