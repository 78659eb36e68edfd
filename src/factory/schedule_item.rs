use chrono::NaiveDate;
use fake::{Dummy, Fake, Faker};
use serde::Deserialize;
use sqlx::PgPool;

use crate::model::schedule_item::{ScheduleItem, TABLE_NAME};

/// Inserts rows directly, bypassing the creation function, so tests can
/// stage arbitrary schedules (including the conflicting ones the function
/// would reject). Callers must route valid foreign keys in through the
/// modifier.
pub struct ScheduleItemFactory<T: Clone> {
    modifier_one: fn(x: &ScheduleItem, ext: T) -> ScheduleItem,
    modifier_many: fn(x: &ScheduleItem, idx: usize, ext: T) -> ScheduleItem,
}

impl<T: Clone> Default for ScheduleItemFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ScheduleItemFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &ScheduleItem, ext: T) -> ScheduleItem) {
        self.modifier_one = modifier
    }

    pub fn modified_many(
        &mut self,
        modifier: fn(x: &ScheduleItem, idx: usize, ext: T) -> ScheduleItem,
    ) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<ScheduleItem> {
        let data = ScheduleItemDummy::new().generate_one();
        let mut data = (self.modifier_one)(&data, ext);
        let row: (i32,) = sqlx::query_as(
            format!(
                r#"INSERT INTO {} (group_id, teacher_id, subject_id, "date", "position", "type")
                VALUES ($1, $2, $3, $4, $5, $6) RETURNING id"#,
                TABLE_NAME
            )
            .as_str(),
        )
        .bind(data.group_id)
        .bind(data.teacher_id)
        .bind(data.subject_id)
        .bind(data.date)
        .bind(data.position)
        .bind(&data.item_type)
        .fetch_one(db)
        .await?;
        data.id = row.0;
        Ok(data)
    }

    pub async fn generate_many(
        &mut self,
        db: &PgPool,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<ScheduleItem>> {
        let data = ScheduleItemDummy::new().generate_many(num);
        let mut result: Vec<ScheduleItem> = vec![];
        for (idx, item) in data.iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        let mut tx = db.begin().await?;
        for item in result.iter_mut() {
            let row: (i32,) = sqlx::query_as(
                format!(
                    r#"INSERT INTO {} (group_id, teacher_id, subject_id, "date", "position", "type")
                    VALUES ($1, $2, $3, $4, $5, $6) RETURNING id"#,
                    TABLE_NAME
                )
                .as_str(),
            )
            .bind(item.group_id)
            .bind(item.teacher_id)
            .bind(item.subject_id)
            .bind(item.date)
            .bind(item.position)
            .bind(&item.item_type)
            .fetch_one(&mut *tx)
            .await?;
            item.id = row.0;
        }
        tx.commit().await?;
        Ok(result)
    }
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize, Dummy, Clone)]
struct ScheduleItemDummy {
    pub date: NaiveDate,
    #[dummy(faker = "1..=8")]
    pub position: i32,
    pub item_type: String,
}

impl ScheduleItemDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    pub fn generate_one(&self) -> ScheduleItem {
        let dummy = Faker.fake::<ScheduleItemDummy>();
        ScheduleItem {
            id: 0,
            group_id: 0,
            teacher_id: 0,
            subject_id: 0,
            date: dummy.date,
            position: dummy.position,
            item_type: dummy.item_type,
        }
    }

    pub fn generate_many(&self, num: u32) -> Vec<ScheduleItem> {
        let mut result: Vec<ScheduleItem> = vec![];
        for _ in 0..num {
            let dummy = Faker.fake::<Self>();
            result.push(ScheduleItem {
                id: 0,
                group_id: 0,
                teacher_id: 0,
                subject_id: 0,
                date: dummy.date,
                position: dummy.position,
                item_type: dummy.item_type,
            });
        }
        result
    }
}
