use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;

/// Application operations on users, one per business action.
///
/// Errors from the domain model and the repository are returned as they are.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserUsecase: Send + Sync {
    async fn create(&self, name: String) -> UserResult<User>;

    async fn read_by_id(&self, id: i64) -> UserResult<User>;

    async fn read_all(&self) -> UserResult<Vec<User>>;

    /// Rename an existing user.
    async fn update(&self, id: i64, name: String) -> UserResult<User>;

    async fn delete(&self, id: i64) -> UserResult<()>;
}

/// [`UserUsecase`] over any [`UserRepository`].
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R: UserRepository> UserUsecase for UserService<R> {
    #[instrument(skip(self))]
    async fn create(&self, name: String) -> UserResult<User> {
        let user = User::new(name)?;
        self.repository.create(user).await
    }

    #[instrument(skip(self))]
    async fn read_by_id(&self, id: i64) -> UserResult<User> {
        self.repository.read_by_id(id).await
    }

    #[instrument(skip(self))]
    async fn read_all(&self) -> UserResult<Vec<User>> {
        self.repository.read_all().await
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, name: String) -> UserResult<User> {
        let mut user = self.repository.read_by_id(id).await?;
        user.rename(name)?;
        self.repository.update(user).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> UserResult<()> {
        let user = self.repository.read_by_id(id).await?;
        self.repository.delete(user).await
    }
}
