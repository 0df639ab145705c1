use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::User,
    repository::{UserRepository, persisted_id},
};

/// [`UserRepository`] backed by PostgreSQL through SeaORM.
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn storage_error(err: DbErr) -> UserError {
    tracing::error!(error = %err, "User storage operation failed");
    UserError::Storage(format!("Database error: {}", err))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let model = entity::insert_model(&user)
            .insert(&self.db)
            .await
            .map_err(storage_error)?;

        tracing::info!(user_id = model.id, "Created user");
        model.try_into()
    }

    async fn read_by_id(&self, id: i64) -> UserResult<User> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_error)?
            .ok_or(UserError::NotFound(id))?
            .try_into()
    }

    async fn read_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        models.into_iter().map(User::try_from).collect()
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let id = persisted_id(&user)?;

        let model = match entity::update_model(id, &user).update(&self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Err(UserError::NotFound(id)),
            Err(e) => return Err(storage_error(e)),
        };

        tracing::info!(user_id = id, "Updated user");
        model.try_into()
    }

    async fn delete(&self, user: User) -> UserResult<()> {
        let id = persisted_id(&user)?;

        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(storage_error)?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn row(id: i64, name: &str) -> entity::Model {
        entity::Model {
            id,
            name: name.to_string(),
        }
    }

    fn no_rows() -> Vec<entity::Model> {
        Vec::new()
    }

    fn mock() -> MockDatabase {
        MockDatabase::new(DatabaseBackend::Postgres)
    }

    #[tokio::test]
    async fn test_create_returns_database_id() {
        let db = mock().append_query_results([[row(1, "sample")]]).into_connection();
        let repo = PgUserRepository::new(db);

        let created = repo.create(User::new("sample").unwrap()).await.unwrap();
        assert_eq!(created, User::restore(1, "sample").unwrap());
    }

    #[tokio::test]
    async fn test_read_by_id_missing_row_is_not_found() {
        let db = mock().append_query_results([no_rows()]).into_connection();
        let repo = PgUserRepository::new(db);

        assert_eq!(repo.read_by_id(7).await, Err(UserError::NotFound(7)));
    }

    #[tokio::test]
    async fn test_read_all_maps_rows_in_order() {
        let db = mock()
            .append_query_results([[row(1, "a"), row(2, "b")]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let names: Vec<_> = repo
            .read_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name().to_string())
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_read_all_query_failure_is_storage_error() {
        let db = mock()
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let err = repo.read_all().await.unwrap_err();
        assert!(matches!(err, UserError::Storage(ref msg) if msg.contains("connection reset")));
    }

    #[tokio::test]
    async fn test_update_writes_new_name() {
        let db = mock().append_query_results([[row(3, "renamed")]]).into_connection();
        let repo = PgUserRepository::new(db);

        let updated = repo
            .update(User::restore(3, "renamed").unwrap())
            .await
            .unwrap();
        assert_eq!(updated.name(), "renamed");
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = mock().append_query_results([no_rows()]).into_connection();
        let repo = PgUserRepository::new(db);

        let result = repo.update(User::restore(3, "x").unwrap()).await;
        assert_eq!(result, Err(UserError::NotFound(3)));
    }

    #[tokio::test]
    async fn test_delete_without_affected_rows_is_not_found() {
        let db = mock()
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let result = repo.delete(User::restore(5, "x").unwrap()).await;
        assert_eq!(result, Err(UserError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_delete_existing_row() {
        let db = mock()
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert_eq!(repo.delete(User::restore(5, "x").unwrap()).await, Ok(()));
    }
}
