use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub nickname: String,
    pub password_hash: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::board_post::Entity")]
    BoardPost,
}

impl Related<super::board_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardPost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
