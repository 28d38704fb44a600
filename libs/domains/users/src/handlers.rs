use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        ValidationErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, ListUsersQuery, UpdateUser, UserResponse};
use crate::repository::UserStore;
use crate::service::UserService;

pub const TAG: &str = "users";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(UserResponse, CreateUser, UpdateUser),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            BadRequestIdResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the user router with all HTTP endpoints
pub fn router<S: UserStore + 'static>(service: UserService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users::<S>).post(create_user::<S>))
        .route(
            "/{id}",
            get(get_user::<S>)
                .put(update_user::<S>)
                .delete(delete_user::<S>),
        )
        .with_state(shared_service)
}

/// List users ordered by id
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListUsersQuery),
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    ValidatedQuery(query): ValidatedQuery<ListUsersQuery>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.list_users(query.offset, query.limit).await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<UserResponse>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Partially update a user; omitted fields are left untouched
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    IdPath(id): IdPath,
    ValidatedJson(patch): ValidatedJson<UpdateUser>,
) -> UserResult<Json<UserResponse>> {
    let user = service.update_user(id, patch).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    IdPath(id): IdPath,
) -> UserResult<StatusCode> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
