use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::user::{CreateUserDto, ListUsersQuery, UpdateUserDto};

/// Repository for admin user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user, active by default.
    pub async fn create(&self, dto: CreateUserDto) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(dto.email),
            full_name: ActiveValue::Set(dto.full_name),
            role: ActiveValue::Set(dto.role),
            department: ActiveValue::Set(dto.department),
            phone: ActiveValue::Set(dto.phone),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets a page of users matching the query, newest first.
    pub async fn list(
        &self,
        query: &ListUsersQuery,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let mut select = entity::prelude::User::find();
        if let Some(role) = &query.role {
            select = select.filter(entity::user::Column::Role.eq(role));
        }
        if let Some(is_active) = query.is_active {
            select = select.filter(entity::user::Column::IsActive.eq(is_active));
        }
        if let Some(search) = &query.search {
            select = select.filter(
                Condition::any()
                    .add(entity::user::Column::Email.contains(search))
                    .add(entity::user::Column::FullName.contains(search)),
            );
        }
        let paginator = select
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, limit);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((items, total))
    }

    /// Applies a patch to a user record.
    pub async fn update(
        &self,
        user: entity::user::Model,
        dto: &UpdateUserDto,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active = user.into_active_model();
        if let Some(email) = &dto.email {
            active.email = ActiveValue::Set(email.clone());
        }
        if let Some(full_name) = &dto.full_name {
            active.full_name = ActiveValue::Set(full_name.clone());
        }
        if let Some(role) = &dto.role {
            active.role = ActiveValue::Set(role.clone());
        }
        if let Some(department) = &dto.department {
            active.department = ActiveValue::Set(Some(department.clone()));
        }
        if let Some(phone) = &dto.phone {
            active.phone = ActiveValue::Set(Some(phone.clone()));
        }
        if let Some(is_active) = dto.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.update(self.db).await
    }
}
