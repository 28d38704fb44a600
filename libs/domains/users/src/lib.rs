//! Users Domain
//!
//! CRUD over a single `users` table with case-insensitive unique emails and
//! partial updates.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Uniqueness, existence checks, one unit of work per call
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + sea-orm / in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← Row ↔ record mapping
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserStore, UserService};
//!
//! let service = UserService::new(InMemoryUserStore::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateUser, DEFAULT_LIST_LIMIT, ListUsersQuery, MAX_LIST_LIMIT, MAX_LIST_OFFSET, UpdateUser, User,
    UserResponse, normalize_email,
};
pub use postgres::{PgUserRepository, PgUserStore};
pub use repository::{InMemoryUnitOfWork, InMemoryUserStore, UserRepository, UserStore, UserUnitOfWork};
pub use service::UserService;
