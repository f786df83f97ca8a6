use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::api::PaginationDto;

/// Admin user representation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
            role: model.role,
            department: model.department,
            phone: model.phone,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

/// Input for `POST /api/users`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub email: String,
    pub full_name: String,
    #[serde(default = "default_role")]
    pub role: String,
    pub department: Option<String>,
    pub phone: Option<String>,
}

fn default_role() -> String {
    "user".to_string()
}

/// Patch for `PATCH /api/users/{id}`. `None` leaves the field unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}

/// Query string for `GET /api/users`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub role: Option<String>,
    pub is_active: Option<bool>,
    /// Case-insensitive partial match on email or full name.
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// Page of users with its pagination envelope.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedUsersDto {
    pub items: Vec<UserDto>,
    pub pagination: PaginationDto,
}
