use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{CreateUser, MAX_LIST_OFFSET, UpdateUser, User, normalize_email},
    repository::{UserRepository, UserStore, UserUnitOfWork},
};

/// sea-orm repository over any connection: a pool, or a transaction when
/// used as a unit of work.
pub struct PgUserRepository<C = DatabaseConnection> {
    conn: C,
}

impl<C: ConnectionTrait> PgUserRepository<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

fn sql_err(err: DbErr, email: Option<&str>) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            UserError::DuplicateEmail(email.unwrap_or_default().to_string())
        }
        _ => UserError::Internal(format!("Database error: {}", err)),
    }
}

#[async_trait]
impl<C> UserRepository for PgUserRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let email = normalize_email(&input.email);
        let now = Utc::now();

        let active_model = entity::ActiveModel {
            email: Set(email.clone()),
            name: Set(input.name),
            age: Set(input.age),
            is_active: Set(input.is_active),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.conn)
            .await
            .map_err(|e| sql_err(e, Some(&email)))?;

        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|e| sql_err(e, None))?;

        Ok(model.map(Into::into))
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(normalize_email(email)))
            .one(&self.conn)
            .await
            .map_err(|e| sql_err(e, None))?;

        Ok(model.map(Into::into))
    }

    async fn list(&self, offset: u64, limit: u64) -> UserResult<Vec<User>> {
        // Drivers bind offset and limit as i64
        if offset > MAX_LIST_OFFSET {
            return Ok(Vec::new());
        }
        let limit = limit.min(MAX_LIST_OFFSET);

        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.conn)
            .await
            .map_err(|e| sql_err(e, None))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, patch: UpdateUser) -> UserResult<Option<User>> {
        let email = patch.email.as_deref().map(normalize_email);

        let mut active_model = entity::ActiveModel {
            id: Unchanged(id),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        if let Some(email) = &email {
            active_model.email = Set(email.clone());
        }
        if let Some(name) = patch.name {
            active_model.name = Set(name);
        }
        if let Some(age) = patch.age {
            active_model.age = Set(age);
        }
        if let Some(is_active) = patch.is_active {
            active_model.is_active = Set(is_active);
        }

        match active_model.update(&self.conn).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(sql_err(e, email.as_deref())),
        }
    }

    async fn delete(&self, id: i32) -> UserResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|e| sql_err(e, None))?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl UserUnitOfWork for PgUserRepository<DatabaseTransaction> {
    async fn commit(self) -> UserResult<()> {
        self.conn
            .commit()
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))
    }
}

/// Opens one database transaction per unit of work.
///
/// An uncommitted `DatabaseTransaction` rolls back when dropped.
#[derive(Clone)]
pub struct PgUserStore {
    db: DatabaseConnection,
}

impl PgUserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    type Work = PgUserRepository<DatabaseTransaction>;

    async fn begin(&self) -> UserResult<Self::Work> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?;

        Ok(PgUserRepository::new(txn))
    }
}
