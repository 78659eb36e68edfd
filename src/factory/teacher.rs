use fake::{Dummy, Fake, Faker};
use serde::Deserialize;
use sqlx::PgPool;

use crate::model::teacher::{Teacher, TABLE_NAME};

pub struct TeacherFactory<T: Clone> {
    modifier_one: fn(x: &Teacher, ext: T) -> Teacher,
    modifier_many: fn(x: &Teacher, idx: usize, ext: T) -> Teacher,
}

impl<T: Clone> Default for TeacherFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> TeacherFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Teacher, ext: T) -> Teacher) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Teacher, idx: usize, ext: T) -> Teacher) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Teacher> {
        let data = TeacherDummy::new().generate_one();
        let mut data = (self.modifier_one)(&data, ext);
        let row: (i32,) = sqlx::query_as(
            format!(
                "INSERT INTO {} (first_name, last_name, info) VALUES ($1, $2, $3) RETURNING id",
                TABLE_NAME
            )
            .as_str(),
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.info)
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
    ) -> anyhow::Result<Vec<Teacher>> {
        let data = TeacherDummy::new().generate_many(num);
        let mut result: Vec<Teacher> = vec![];
        for (idx, item) in data.iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        let mut tx = db.begin().await?;
        for item in result.iter_mut() {
            let row: (i32,) = sqlx::query_as(
                format!(
                    "INSERT INTO {} (first_name, last_name, info) VALUES ($1, $2, $3) RETURNING id",
                    TABLE_NAME
                )
                .as_str(),
            )
            .bind(&item.first_name)
            .bind(&item.last_name)
            .bind(&item.info)
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
struct TeacherDummy {
    pub first_name: String,
    pub last_name: String,
    pub info: Option<String>,
}

impl TeacherDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    pub fn generate_one(&self) -> Teacher {
        let dummy = Faker.fake::<TeacherDummy>();
        Teacher {
            id: 0,
            first_name: dummy.first_name,
            last_name: dummy.last_name,
            info: dummy.info,
        }
    }

    pub fn generate_many(&self, num: u32) -> Vec<Teacher> {
        let mut result: Vec<Teacher> = vec![];
        for _ in 0..num {
            let dummy = Faker.fake::<Self>();
            result.push(Teacher {
                id: 0,
                first_name: dummy.first_name,
                last_name: dummy.last_name,
                info: dummy.info,
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::{factory::teacher::TeacherFactory, model::teacher::TABLE_NAME};

    #[sqlx::test]
    async fn test_generate_one(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = TeacherFactory::new();
        let teacher = factory.generate_one(&pool, ()).await?;

        // Expect
        assert!(teacher.id > 0);
        let num_data: (i64,) =
            sqlx::query_as(format!(r#"SELECT COUNT(*) FROM {}"#, TABLE_NAME).as_str())
                .fetch_one(&pool)
                .await?;
        assert_eq!(num_data.0, 1);
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_one_modified(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = TeacherFactory::<Option<String>>::new();
        factory.modified_one(|data, ext| {
            let mut data = data.clone();
            data.info = ext;
            data
        });
        let teacher = factory
            .generate_one(&pool, Some("department chair".to_string()))
            .await?;

        // Expect
        let res: (Option<String>,) =
            sqlx::query_as(format!("SELECT info FROM {} WHERE id = $1", TABLE_NAME).as_str())
                .bind(teacher.id)
                .fetch_one(&pool)
                .await?;
        assert_eq!(res.0, Some("department chair".to_string()));
        Ok(())
    }
}
