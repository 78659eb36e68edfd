use sqlx::{pool::PoolConnection, Postgres};

use crate::model::{group, subject, teacher};

/// Reference entities that can be checked for existence before an id is
/// trusted by a later query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Group,
    Subject,
    Teacher,
}

impl EntityKind {
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Group => group::TABLE_NAME,
            EntityKind::Subject => subject::TABLE_NAME,
            EntityKind::Teacher => teacher::TABLE_NAME,
        }
    }

    pub fn not_found_message(&self, id: i32) -> String {
        let kind = match self {
            EntityKind::Group => "group",
            EntityKind::Subject => "subject",
            EntityKind::Teacher => "teacher",
        };
        format!("{} with id = {} not found", kind, id)
    }
}

pub async fn entity_exists(
    db: &mut PoolConnection<Postgres>,
    kind: EntityKind,
    id: i32,
) -> anyhow::Result<bool> {
    let count: (i64,) = sqlx::query_as(
        format!("SELECT count(id) FROM {} WHERE id = $1", kind.table_name()).as_str(),
    )
    .bind(id)
    .fetch_one(&mut **db)
    .await?;
    Ok(count.0 > 0)
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::factory::{
        group::GroupFactory, subject::SubjectFactory, teacher::TeacherFactory,
    };

    use super::{entity_exists, EntityKind};

    #[test]
    fn test_not_found_message_names_the_kind() {
        assert_eq!(
            EntityKind::Group.not_found_message(7),
            "group with id = 7 not found".to_string()
        );
        assert_eq!(
            EntityKind::Subject.not_found_message(1),
            "subject with id = 1 not found".to_string()
        );
        assert_eq!(
            EntityKind::Teacher.not_found_message(42),
            "teacher with id = 42 not found".to_string()
        );
    }

    #[sqlx::test]
    async fn test_entity_exists(pool: PgPool) -> anyhow::Result<()> {
        // Given
        let group = GroupFactory::new().generate_one(&pool, ()).await?;
        let subject = SubjectFactory::new().generate_one(&pool, ()).await?;
        let teacher = TeacherFactory::new().generate_one(&pool, ()).await?;
        let mut db = pool.acquire().await?;

        // Expect
        assert!(entity_exists(&mut db, EntityKind::Group, group.id).await?);
        assert!(entity_exists(&mut db, EntityKind::Subject, subject.id).await?);
        assert!(entity_exists(&mut db, EntityKind::Teacher, teacher.id).await?);
        assert!(!entity_exists(&mut db, EntityKind::Group, group.id + 1000).await?);
        Ok(())
    }
}
