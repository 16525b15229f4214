use sea_orm::entity::prelude::*;

/// Persisted session record, keyed by the session identifier carried in the cookie.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board_session")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    /// JSON encoded session map
    #[sea_orm(column_type = "Text")]
    pub data: String,
    /// Unix timestamp in seconds
    pub expires_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
