use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{UserError, UserResult};

/// Message carried by every rejected name.
pub const NAME_REQUIRED: &str = "name is required";

/// User entity.
///
/// The name is never empty: every constructor and [`User::rename`] check it,
/// and the fields are private so no adapter can skip the check. The id is
/// `None` until the user has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct User {
    id: Option<i64>,
    #[validate(length(min = 1))]
    name: String,
}

impl User {
    /// A new, not yet persisted user.
    pub fn new(name: impl Into<String>) -> UserResult<Self> {
        Self {
            id: None,
            name: name.into(),
        }
        .checked()
    }

    /// Rebuild a persisted user from stored values.
    pub fn restore(id: i64, name: impl Into<String>) -> UserResult<Self> {
        Self {
            id: Some(id),
            name: name.into(),
        }
        .checked()
    }

    /// Replace the name. On error the user is left untouched.
    pub fn rename(&mut self, name: impl Into<String>) -> UserResult<()> {
        let renamed = Self {
            id: self.id,
            name: name.into(),
        }
        .checked()?;
        *self = renamed;
        Ok(())
    }

    /// Attach the id a store assigned on insert.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn checked(self) -> UserResult<Self> {
        self.validate()
            .map_err(|_| UserError::Validation(NAME_REQUIRED.to_string()))?;
        Ok(self)
    }
}

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// A missing `name` decodes as empty and is rejected by the domain rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserRequest {
    #[serde(default)]
    #[schema(example = "sample")]
    pub name: String,
}

/// User as returned over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "sample")]
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            name: user.name,
        }
    }
}
