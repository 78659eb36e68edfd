use fake::{Dummy, Fake, Faker};
use serde::Deserialize;
use sqlx::PgPool;

use crate::model::subject::{Subject, TABLE_NAME};

pub struct SubjectFactory<T: Clone> {
    modifier_one: fn(x: &Subject, ext: T) -> Subject,
    modifier_many: fn(x: &Subject, idx: usize, ext: T) -> Subject,
}

impl<T: Clone> Default for SubjectFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> SubjectFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Subject, ext: T) -> Subject) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Subject, idx: usize, ext: T) -> Subject) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Subject> {
        let data = SubjectDummy::new().generate_one();
        let mut data = (self.modifier_one)(&data, ext);
        let row: (i32,) = sqlx::query_as(
            format!(
                "INSERT INTO {} (name, short_name) VALUES ($1, $2) RETURNING id",
                TABLE_NAME
            )
            .as_str(),
        )
        .bind(&data.name)
        .bind(&data.short_name)
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
    ) -> anyhow::Result<Vec<Subject>> {
        let data = SubjectDummy::new().generate_many(num);
        let mut result: Vec<Subject> = vec![];
        for (idx, item) in data.iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        let mut tx = db.begin().await?;
        for item in result.iter_mut() {
            let row: (i32,) = sqlx::query_as(
                format!(
                    "INSERT INTO {} (name, short_name) VALUES ($1, $2) RETURNING id",
                    TABLE_NAME
                )
                .as_str(),
            )
            .bind(&item.name)
            .bind(&item.short_name)
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
struct SubjectDummy {
    pub name: String,
    pub short_name: String,
}

impl SubjectDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    pub fn generate_one(&self) -> Subject {
        let dummy = Faker.fake::<SubjectDummy>();
        Subject {
            id: 0,
            name: dummy.name,
            short_name: dummy.short_name,
        }
    }

    pub fn generate_many(&self, num: u32) -> Vec<Subject> {
        let mut result: Vec<Subject> = vec![];
        for _ in 0..num {
            let dummy = Faker.fake::<Self>();
            result.push(Subject {
                id: 0,
                name: dummy.name,
                short_name: dummy.short_name,
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::{factory::subject::SubjectFactory, model::subject::TABLE_NAME};

    #[sqlx::test]
    async fn test_generate_one(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = SubjectFactory::new();
        let subject = factory.generate_one(&pool, ()).await?;

        // Expect
        assert!(subject.id > 0);
        let num_data: (i64,) =
            sqlx::query_as(format!(r#"SELECT COUNT(*) FROM {}"#, TABLE_NAME).as_str())
                .fetch_one(&pool)
                .await?;
        assert_eq!(num_data.0, 1);
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_many(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = SubjectFactory::new();
        factory.generate_many(&pool, 5, ()).await?;

        // Expect
        let num_data: (i64,) =
            sqlx::query_as(format!(r#"SELECT COUNT(*) FROM {}"#, TABLE_NAME).as_str())
                .fetch_one(&pool)
                .await?;
        assert_eq!(num_data.0, 5);
        Ok(())
    }
}
