use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, MAX_LIST_LIMIT, UpdateUser, UserResponse, normalize_email};
use crate::repository::{UserRepository, UserStore, UserUnitOfWork};

/// Service layer for User business logic
///
/// Every operation runs in a single unit of work. Returning early with an
/// error drops the work, which rolls back anything it wrote.
pub struct UserService<S: UserStore> {
    store: Arc<S>,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a user. Fails with `DuplicateEmail` if the email (any case) is taken.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<UserResponse> {
        input.validate()?;

        let work = self.store.begin().await?;

        if work.get_by_email(&input.email).await?.is_some() {
            return Err(UserError::DuplicateEmail(normalize_email(&input.email)));
        }

        let user = work.create(input).await?;
        work.commit().await?;

        tracing::info!(user_id = user.id, "Created user");
        Ok(user.into())
    }

    pub async fn get_user(&self, id: i32) -> UserResult<UserResponse> {
        let work = self.store.begin().await?;
        let user = work.get_by_id(id).await?.ok_or(UserError::NotFound(id))?;
        work.commit().await?;

        Ok(user.into())
    }

    /// List users by id. `limit` is clamped to `MAX_LIST_LIMIT`.
    pub async fn list_users(&self, offset: u64, limit: u64) -> UserResult<Vec<UserResponse>> {
        let work = self.store.begin().await?;
        let users = work.list(offset, limit.min(MAX_LIST_LIMIT)).await?;
        work.commit().await?;

        Ok(users.into_iter().map(Into::into).collect())
    }

    /// Apply a partial update.
    ///
    /// Existence is checked before email uniqueness, so a missing user with a
    /// colliding email yields `NotFound`.
    pub async fn update_user(&self, id: i32, patch: UpdateUser) -> UserResult<UserResponse> {
        patch.validate()?;

        let work = self.store.begin().await?;

        let existing = work.get_by_id(id).await?.ok_or(UserError::NotFound(id))?;

        if patch.is_empty() {
            work.commit().await?;
            return Ok(existing.into());
        }

        if let Some(email) = &patch.email {
            if let Some(holder) = work.get_by_email(email).await? {
                if holder.id != id {
                    return Err(UserError::DuplicateEmail(normalize_email(email)));
                }
            }
        }

        let user = work
            .update(id, patch)
            .await?
            .ok_or(UserError::NotFound(id))?;
        work.commit().await?;

        tracing::info!(user_id = user.id, "Updated user");
        Ok(user.into())
    }

    pub async fn delete_user(&self, id: i32) -> UserResult<()> {
        let work = self.store.begin().await?;

        if !work.delete(id).await? {
            return Err(UserError::NotFound(id));
        }
        work.commit().await?;

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}
