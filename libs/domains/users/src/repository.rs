use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Persistence port for [`User`].
///
/// Implementations assign ids on `create`, report a missing row as
/// [`UserError::NotFound`] and every other failure as [`UserError::Storage`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its id.
    async fn create(&self, user: User) -> UserResult<User>;

    async fn read_by_id(&self, id: i64) -> UserResult<User>;

    /// All users by ascending id. Empty when there are none.
    async fn read_all(&self) -> UserResult<Vec<User>>;

    async fn update(&self, user: User) -> UserResult<User>;

    async fn delete(&self, user: User) -> UserResult<()>;
}

/// Id of a user that is expected to be persisted already.
pub(crate) fn persisted_id(user: &User) -> UserResult<i64> {
    user.id()
        .ok_or_else(|| UserError::Storage("user has not been persisted".to_string()))
}

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    users: BTreeMap<i64, User>,
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut guard = self.store.write().await;
        let store = &mut *guard;

        store.last_id += 1;
        let user = user.with_id(store.last_id);
        store.users.insert(store.last_id, user.clone());

        tracing::info!(user_id = store.last_id, "Created user");
        Ok(user)
    }

    async fn read_by_id(&self, id: i64) -> UserResult<User> {
        let store = self.store.read().await;
        store.users.get(&id).cloned().ok_or(UserError::NotFound(id))
    }

    async fn read_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let id = persisted_id(&user)?;
        let mut store = self.store.write().await;

        let slot = store.users.get_mut(&id).ok_or(UserError::NotFound(id))?;
        *slot = user.clone();

        tracing::info!(user_id = id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, user: User) -> UserResult<()> {
        let id = persisted_id(&user)?;
        let mut store = self.store.write().await;

        store.users.remove(&id).ok_or(UserError::NotFound(id))?;

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}
