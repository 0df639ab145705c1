use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

use crate::error::UserError;
use crate::models::User;

/// Row of the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Rows are re-validated on the way in; a row that breaks the domain rule is
// a storage problem, not a client one.
impl TryFrom<Model> for User {
    type Error = UserError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        User::restore(model.id, model.name).map_err(|e| {
            UserError::Storage(format!("invalid row in users (id {}): {}", model.id, e))
        })
    }
}

/// Active model for an insert. Any id on `user` is ignored; the database
/// assigns one.
pub fn insert_model(user: &User) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(user.name().to_owned()),
    }
}

/// Active model writing `user`'s name to the row with id `id`.
pub fn update_model(id: i64, user: &User) -> ActiveModel {
    ActiveModel {
        id: Unchanged(id),
        name: Set(user.name().to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_to_user() {
        let user = User::try_from(Model {
            id: 4,
            name: "dora".into(),
        })
        .unwrap();
        assert_eq!(user, User::restore(4, "dora").unwrap());
    }

    #[test]
    fn test_blank_row_is_storage_error() {
        let result = User::try_from(Model {
            id: 4,
            name: String::new(),
        });
        assert!(matches!(result, Err(UserError::Storage(_))));
    }

    #[test]
    fn test_insert_model_leaves_id_to_database() {
        let user = User::restore(8, "eve").unwrap();
        let active = insert_model(&user);
        assert_eq!(active.id, NotSet);
        assert_eq!(active.name, Set("eve".to_string()));
    }
}
