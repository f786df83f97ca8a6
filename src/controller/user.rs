use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::{
        api::PaginationDto,
        user::{CreateUserDto, ListUsersQuery, PaginatedUsersDto, UpdateUserDto, UserDto},
    },
    state::AppState,
};

/// `POST /api/users`
pub async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let repo = UserRepository::new(&state.db);
    if repo.find_by_email(&dto.email).await?.is_some() {
        return Err(AppError::BadRequest("Email already in use".to_string()));
    }
    let user = repo.create(dto).await?;
    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// `GET /api/users`
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<PaginatedUsersDto>, AppError> {
    let page = query.page.max(1);
    let limit = query.limit.clamp(1, 100);
    let (items, total) = UserRepository::new(&state.db)
        .list(&query, page, limit)
        .await?;
    Ok(Json(PaginatedUsersDto {
        items: items.into_iter().map(UserDto::from).collect(),
        pagination: PaginationDto::new(page, limit, total),
    }))
}

/// `GET /api/users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDto>, AppError> {
    let user = UserRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    Ok(Json(user.into()))
}

/// `PATCH /api/users/{id}`
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<Json<UserDto>, AppError> {
    let repo = UserRepository::new(&state.db);
    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    if let Some(email) = &dto.email {
        if let Some(existing) = repo.find_by_email(email).await? {
            if existing.id != id {
                return Err(AppError::BadRequest("Email already in use".to_string()));
            }
        }
    }
    let updated = repo.update(user, &dto).await?;
    Ok(Json(updated.into()))
}
