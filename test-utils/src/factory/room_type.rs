//! Room type factory for creating test room inventory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test room types with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room_type::RoomTypeFactory;
///
/// let deluxe = RoomTypeFactory::new(&db)
///     .name("Deluxe Room")
///     .total_rooms(20)
///     .build()
///     .await?;
/// ```
pub struct RoomTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    name_en: String,
    total_rooms: i32,
}

impl<'a> RoomTypeFactory<'a> {
    /// Creates a new RoomTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Room Type {id}"` where id is auto-incremented
    /// - name_en: same as name
    /// - total_rooms: `10`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let name = format!("Room Type {}", id);
        Self {
            db,
            name_en: name.clone(),
            name,
            total_rooms: 10,
        }
    }

    /// Sets the display name (also used as the English name unless
    /// `name_en` is set explicitly afterwards).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self.name_en = self.name.clone();
        self
    }

    /// Sets the English display name.
    pub fn name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = name_en.into();
        self
    }

    /// Sets the total physical room count.
    pub fn total_rooms(mut self, total_rooms: i32) -> Self {
        self.total_rooms = total_rooms;
        self
    }

    /// Builds and inserts the room type entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room_type::Model)` - Created room type entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room_type::Model, DbErr> {
        entity::room_type::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            name_en: ActiveValue::Set(self.name_en),
            total_rooms: ActiveValue::Set(self.total_rooms),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room type with the given name and room count.
///
/// Shorthand for `RoomTypeFactory::new(db).name(name).total_rooms(n).build()`.
pub async fn create_room_type(
    db: &DatabaseConnection,
    name: impl Into<String>,
    total_rooms: i32,
) -> Result<entity::room_type::Model, DbErr> {
    RoomTypeFactory::new(db)
        .name(name)
        .total_rooms(total_rooms)
        .build()
        .await
}
