use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, JsonBody,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{UserRequest, UserResponse};
use crate::usecase::UserUsecase;

const TAG: &str = "users";

/// Mount point of [`router`] in the service.
pub const BASE_PATH: &str = "/users";

/// OpenAPI documentation for the users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(UserRequest, UserResponse),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags((name = TAG, description = "User management endpoints"))
)]
pub struct ApiDoc;

type SharedUsecase = Arc<dyn UserUsecase>;

/// Routes for `/` and `/{id}`, meant to be nested under [`BASE_PATH`].
///
/// Each handler decodes the request, makes exactly one use-case call and
/// encodes the result.
pub fn router(usecase: SharedUsecase) -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(usecase)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All users, ordered by id", body = Vec<UserResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users(State(usecase): State<SharedUsecase>) -> UserResult<Json<Vec<UserResponse>>> {
    let users = usecase.read_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user(
    State(usecase): State<SharedUsecase>,
    JsonBody(input): JsonBody<UserRequest>,
) -> UserResult<impl IntoResponse> {
    let user = usecase.create(input.name).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user(
    State(usecase): State<SharedUsecase>,
    IdPath(id): IdPath,
) -> UserResult<Json<UserResponse>> {
    let user = usecase.read_by_id(id).await?;
    Ok(Json(user.into()))
}

/// Rename a user
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user(
    State(usecase): State<SharedUsecase>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UserRequest>,
) -> UserResult<Json<UserResponse>> {
    let user = usecase.update(id, input.name).await?;
    Ok(Json(user.into()))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user(
    State(usecase): State<SharedUsecase>,
    IdPath(id): IdPath,
) -> UserResult<StatusCode> {
    usecase.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
