use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository for room inventory definitions.
pub struct RoomTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a room type by its display name.
    ///
    /// Bookings reference room types by this name, so this is the lookup
    /// the availability calculator starts from.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The room type
    /// - `Ok(None)`: No room type with that name
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::room_type::Model>, DbErr> {
        entity::prelude::RoomType::find()
            .filter(entity::room_type::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Counts room type rows. Used by startup seeding to detect an empty
    /// inventory table.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::RoomType::find().count(self.db).await
    }

    /// Creates a room type definition.
    ///
    /// # Arguments
    /// - `name`: Local-language display name (unique)
    /// - `name_en`: English display name
    /// - `total_rooms`: Physical room count ceiling
    ///
    /// # Returns
    /// - `Ok(Model)`: The created room type
    /// - `Err(DbErr)`: Database error (including name uniqueness violation)
    pub async fn create(
        &self,
        name: String,
        name_en: String,
        total_rooms: i32,
    ) -> Result<entity::room_type::Model, DbErr> {
        entity::room_type::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
            name_en: ActiveValue::Set(name_en),
            total_rooms: ActiveValue::Set(total_rooms),
        }
        .insert(self.db)
        .await
    }
}
