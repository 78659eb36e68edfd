use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::FromRow;

pub const TABLE_NAME: &str = "public.schedule_item";
pub const CREATE_FN_NAME: &str = "public.create_schedule_item";
pub const CURRENT_MONTH_FN_NAME: &str = "public.current_month_schedule";

#[derive(Clone, Debug, Deserialize, FromRow)]
pub struct ScheduleItem {
    pub id: i32,
    pub group_id: i32,
    pub teacher_id: i32,
    pub subject_id: i32,
    pub date: NaiveDate,
    pub position: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub item_type: String,
}

/// One row of the schedule joined against group, teacher and subject.
#[derive(Clone, Debug, FromRow)]
pub struct ScheduleItemDetail {
    pub id: i32,
    pub date: NaiveDate,
    pub position: i32,
    pub item_type: String,
    pub group_id: i32,
    pub group_name: String,
    pub teacher_id: i32,
    pub teacher_first_name: String,
    pub teacher_last_name: String,
    pub subject_id: i32,
    pub subject_name: String,
    pub subject_short_name: String,
}
