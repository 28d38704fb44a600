pub use sea_orm_migration::prelude::*;

mod m20241129_000000_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241129_000000_create_users::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Database, DatabaseBackend, Statement};

    #[tokio::test]
    async fn test_up_and_down_on_sqlite() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        Migrator::up(&db, None).await.unwrap();
        let insert = Statement::from_string(
            DatabaseBackend::Sqlite,
            "INSERT INTO users (email, name, created_at, updated_at) \
             VALUES ('a@x.com', 'A', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z')",
        );
        db.execute_raw(insert.clone()).await.unwrap();
        assert!(db.execute_raw(insert).await.is_err(), "email must be unique");

        Migrator::down(&db, None).await.unwrap();
        let select = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 FROM users");
        assert!(db.query_one_raw(select).await.is_err());
    }
}
