use fake::{Dummy, Fake, Faker};
use serde::Deserialize;
use sqlx::PgPool;

use crate::model::group::{Group, TABLE_NAME};

pub struct GroupFactory<T: Clone> {
    modifier_one: fn(x: &Group, ext: T) -> Group,
    modifier_many: fn(x: &Group, idx: usize, ext: T) -> Group,
}

impl<T: Clone> Default for GroupFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> GroupFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Group, ext: T) -> Group) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Group, idx: usize, ext: T) -> Group) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Group> {
        let data = GroupDummy::new().generate_one();
        let mut data = (self.modifier_one)(&data, ext);
        let row: (i32,) = sqlx::query_as(
            format!("INSERT INTO {} (name) VALUES ($1) RETURNING id", TABLE_NAME).as_str(),
        )
        .bind(&data.name)
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
    ) -> anyhow::Result<Vec<Group>> {
        let data = GroupDummy::new().generate_many(num);
        let mut result: Vec<Group> = vec![];
        for (idx, item) in data.iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        let mut tx = db.begin().await?;
        for item in result.iter_mut() {
            let row: (i32,) = sqlx::query_as(
                format!("INSERT INTO {} (name) VALUES ($1) RETURNING id", TABLE_NAME).as_str(),
            )
            .bind(&item.name)
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
struct GroupDummy {
    pub name: String,
}

impl GroupDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    pub fn generate_one(&self) -> Group {
        let dummy = Faker.fake::<GroupDummy>();
        Group {
            id: 0,
            name: dummy.name,
        }
    }

    pub fn generate_many(&self, num: u32) -> Vec<Group> {
        let mut result: Vec<Group> = vec![];
        for _ in 0..num {
            let dummy = Faker.fake::<Self>();
            result.push(Group {
                id: 0,
                name: dummy.name,
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::{
        factory::group::GroupFactory,
        model::group::TABLE_NAME,
    };

    #[sqlx::test]
    async fn test_generate_one(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = GroupFactory::new();
        let group = factory.generate_one(&pool, ()).await?;

        // Expect
        assert!(group.id > 0);
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
        let mut factory = GroupFactory::<String>::new();
        factory.modified_one(|data, ext| {
            let mut data = data.clone();
            data.name = ext;
            data
        });
        let group = factory
            .generate_one(&pool, "KN-21".to_string())
            .await?;

        // Expect
        let res: (String,) =
            sqlx::query_as(format!("SELECT name FROM {} WHERE id = $1", TABLE_NAME).as_str())
                .bind(group.id)
                .fetch_one(&pool)
                .await?;
        assert_eq!(res.0, "KN-21".to_string());
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_many(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = GroupFactory::new();
        factory.generate_many(&pool, 10, ()).await?;

        // Expect
        let num_data: (i64,) =
            sqlx::query_as(format!(r#"SELECT COUNT(*) FROM {}"#, TABLE_NAME).as_str())
                .fetch_one(&pool)
                .await?;
        assert_eq!(num_data.0, 10);
        Ok(())
    }
}
