use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, normalize_email};

/// Data access for users. Does not validate input or check uniqueness up
/// front; emails are lowercased on the way in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; storage assigns id and timestamps
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>>;

    /// Lookup by email, compared case-insensitively
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Users ordered by id ascending
    async fn list(&self, offset: u64, limit: u64) -> UserResult<Vec<User>>;

    /// Apply the present fields of `patch` and bump `updated_at`.
    /// Returns `None` if no user has this id.
    async fn update(&self, id: i32, patch: UpdateUser) -> UserResult<Option<User>>;

    /// Returns `false` if no user has this id
    async fn delete(&self, id: i32) -> UserResult<bool>;
}

/// Repository scoped to one logical operation.
///
/// Writes become visible only after [`commit`](Self::commit); dropping the
/// unit of work discards them.
#[async_trait]
pub trait UserUnitOfWork: UserRepository {
    async fn commit(self) -> UserResult<()>;
}

/// Opens units of work
#[async_trait]
pub trait UserStore: Send + Sync {
    type Work: UserUnitOfWork;

    async fn begin(&self) -> UserResult<Self::Work>;
}

#[derive(Debug, Default, Clone)]
struct MemoryState {
    users: BTreeMap<i32, User>,
    last_id: i32,
}

impl MemoryState {
    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// In-memory store (for development/testing)
///
/// Units of work are serialized: each one holds the store lock until it is
/// committed or dropped, and edits a private copy of the data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    type Work = InMemoryUnitOfWork;

    async fn begin(&self) -> UserResult<Self::Work> {
        let guard = self.state.clone().lock_owned().await;
        let staged = RwLock::new(MemoryState::clone(&guard));
        Ok(InMemoryUnitOfWork { guard, staged })
    }
}

pub struct InMemoryUnitOfWork {
    guard: OwnedMutexGuard<MemoryState>,
    staged: RwLock<MemoryState>,
}

#[async_trait]
impl UserRepository for InMemoryUnitOfWork {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut state = self.staged.write().await;

        let email = normalize_email(&input.email);
        if state.email_taken(&email, None) {
            return Err(UserError::DuplicateEmail(email));
        }

        state.last_id += 1;
        let now = Utc::now();
        let user = User {
            id: state.last_id,
            email,
            name: input.name,
            age: input.age,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let state = self.staged.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let email = normalize_email(email);
        let state = self.staged.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn list(&self, offset: u64, limit: u64) -> UserResult<Vec<User>> {
        let state = self.staged.read().await;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(state.users.values().skip(skip).take(take).cloned().collect())
    }

    async fn update(&self, id: i32, patch: UpdateUser) -> UserResult<Option<User>> {
        let mut state = self.staged.write().await;

        let email = patch.email.as_deref().map(normalize_email);
        if let Some(email) = &email {
            if state.email_taken(email, Some(id)) {
                return Err(UserError::DuplicateEmail(email.clone()));
            }
        }

        let Some(user) = state.users.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(email) = email {
            user.email = email;
        }
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(age) = patch.age {
            user.age = age;
        }
        if let Some(is_active) = patch.is_active {
            user.is_active = is_active;
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i32) -> UserResult<bool> {
        let mut state = self.staged.write().await;
        Ok(state.users.remove(&id).is_some())
    }
}

#[async_trait]
impl UserUnitOfWork for InMemoryUnitOfWork {
    async fn commit(self) -> UserResult<()> {
        let InMemoryUnitOfWork { mut guard, staged } = self;
        *guard = staged.into_inner();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(store: &InMemoryUserStore, emails: &[&str]) -> Vec<User> {
        let work = store.begin().await.unwrap();
        let mut users = Vec::new();
        for email in emails {
            users.push(work.create(CreateUser::new(*email, "Test")).await.unwrap());
        }
        work.commit().await.unwrap();
        users
    }

    #[tokio::test]
    async fn create_lowercases_and_assigns_ids() {
        let store = InMemoryUserStore::new();
        let users = seed(&store, &["A@X.com", "b@x.com"]).await;

        assert_eq!(users[0].id, 1);
        assert_eq!(users[1].id, 2);
        assert_eq!(users[0].email, "a@x.com");
        assert_eq!(users[0].created_at, users[0].updated_at);
    }

    #[tokio::test]
    async fn uncommitted_work_is_discarded() {
        let store = InMemoryUserStore::new();

        {
            let work = store.begin().await.unwrap();
            work.create(CreateUser::new("gone@x.com", "Gone")).await.unwrap();
        }

        let work = store.begin().await.unwrap();
        assert!(work.get_by_email("gone@x.com").await.unwrap().is_none());
        assert!(work.list(0, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_by_email_is_case_insensitive() {
        let store = InMemoryUserStore::new();
        seed(&store, &["a@b.com"]).await;

        let work = store.begin().await.unwrap();
        assert!(work.get_by_email("A@B.COM").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_like_a_unique_index() {
        let store = InMemoryUserStore::new();
        seed(&store, &["a@b.com"]).await;

        let work = store.begin().await.unwrap();
        let err = work
            .create(CreateUser::new("A@B.com", "Dup"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::DuplicateEmail(email) if email == "a@b.com"));
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let store = InMemoryUserStore::new();
        let original = seed(&store, &["a@b.com"]).await.remove(0);

        let work = store.begin().await.unwrap();
        let patch = UpdateUser {
            name: Some("Renamed".into()),
            ..Default::default()
        };
        let updated = work.update(original.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.email, original.email);
        assert_eq!(updated.age, original.age);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
    }

    #[tokio::test]
    async fn update_with_null_age_clears_it() {
        let store = InMemoryUserStore::new();
        let work = store.begin().await.unwrap();
        let user = work
            .create(CreateUser::new("aged@b.com", "Aged").with_age(30))
            .await
            .unwrap();

        let patch = UpdateUser {
            age: Some(None),
            ..Default::default()
        };
        let updated = work.update(user.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.age, None);
        assert_eq!(updated.name, "Aged");
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let store = InMemoryUserStore::new();
        let work = store.begin().await.unwrap();

        assert!(work.update(99, UpdateUser::default()).await.unwrap().is_none());
        assert!(!work.delete(99).await.unwrap());
    }

    #[tokio::test]
    async fn list_pages_in_id_order() {
        let store = InMemoryUserStore::new();
        seed(&store, &["a@x.com", "b@x.com", "c@x.com"]).await;

        let work = store.begin().await.unwrap();
        let ids: Vec<i32> = work
            .list(1, 5)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(work.list(u64::MAX, 5).await.unwrap().is_empty());
    }
}
