//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: migrated database fixture, SQLite in-memory by default or a
//!   PostgreSQL container via testcontainers
//! - `TestDataBuilder`: deterministic test data generation
//! - `assertions`: small assertion helpers with contextual messages
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let email = builder.email("alice");
//!     let name = builder.name("user", "main");
//! }
//! ```

mod database;

pub use database::TestDatabase;

/// Builder for test data with deterministic values
///
/// Values derive from a seed, so a given test always produces the same data
/// while different tests do not collide on unique columns.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (seed is the hash of the name)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique, lowercase email address
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let email = TestDataBuilder::new(7).email("alice");
    /// assert_eq!(email, "alice-7@example.com");
    /// ```
    pub fn email(&self, local: &str) -> String {
        format!("{}-{}@example.com", local.to_lowercase(), self.seed)
    }

    /// Unique display name, at most 100 characters for short inputs
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that ids come back strictly ascending, as listing guarantees
    pub fn assert_ascending(ids: &[i32], context: &str) {
        assert!(
            ids.windows(2).all(|pair| pair[0] < pair[1]),
            "{}: expected ascending ids, got {:?}",
            context,
            ids
        );
    }
}
