use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_LIST_LIMIT: u64 = 100;
pub const MAX_LIST_LIMIT: u64 = 1000;
/// Largest offset storage can bind; larger values are rejected at the HTTP edge
pub const MAX_LIST_OFFSET: u64 = i64::MAX as u64;

/// Lowercases an email for storage and uniqueness comparison.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// User record as stored. Built only from storage rows, never from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    /// Always lowercase
    pub email: String,
    pub name: String,
    pub age: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User representation returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = 34)]
    pub age: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            age: user.age,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(email, length(max = 255))]
    #[schema(example = "Jane@Example.com")]
    pub email: String,

    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[validate(range(min = 0, max = 150))]
    #[serde(default)]
    pub age: Option<i32>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl CreateUser {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            age: None,
            is_active: true,
        }
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }
}

fn default_is_active() -> bool {
    true
}

/// Partial update. Only fields that are present in the request are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(email, length(max = 255))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `None` leaves age untouched, `Some(None)` (JSON `null`) clears it
    #[validate(range(min = 0, max = 150))]
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>)]
    pub age: Option<Option<i32>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Keeps a present `null` distinct from a missing field.
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateUser {
    /// True when the patch would not touch any field
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.age.is_none() && self.is_active.is_none()
    }
}

/// Offset pagination for listing users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Number of records to skip (`skip` is accepted as an alias)
    #[serde(default, alias = "skip")]
    #[validate(range(max = MAX_LIST_OFFSET))]
    #[param(example = 0)]
    pub offset: u64,

    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    #[validate(range(max = 1000))]
    #[param(example = 100, maximum = 1000)]
    pub limit: u64,
}

impl Default for ListUsersQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

fn default_limit() -> u64 {
    DEFAULT_LIST_LIMIT
}
