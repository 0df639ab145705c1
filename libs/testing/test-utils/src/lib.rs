//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: deterministic, per-test names
//! - `assertions`: assertion helpers with readable failure messages
//!
//! ```ignore
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new::<migration::Migrator>().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!     let name = builder.name("user", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Deterministic test data keyed by a seed, usually the test name.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

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

    /// `test-{prefix}-{seed}-{suffix}`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("user", "main"), "test-user-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Unwrap an assigned id, failing with `context` when it is missing.
    pub fn assert_assigned_id(id: Option<i64>, context: &str) -> i64 {
        match id {
            Some(id) if id > 0 => id,
            other => panic!("{}: expected an assigned id, got {:?}", context, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        assert_eq!(
            TestDataBuilder::from_test_name("my_test").name("user", "a"),
            TestDataBuilder::from_test_name("my_test").name("user", "a")
        );
        assert_ne!(
            TestDataBuilder::from_test_name("test1").name("user", "a"),
            TestDataBuilder::from_test_name("test2").name("user", "a")
        );
    }

    #[test]
    #[should_panic(expected = "expected an assigned id")]
    fn test_assert_assigned_id_rejects_none() {
        assertions::assert_assigned_id(None, "created user");
    }
}
