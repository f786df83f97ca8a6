use sea_orm::entity::prelude::*;

/// Room inventory definition. One row per physical room category with the
/// total room count that availability computations are bounded by.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Local-language display name. Bookings reference this value.
    #[sea_orm(unique)]
    pub name: String,
    /// English display name.
    pub name_en: String,
    pub total_rooms: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
