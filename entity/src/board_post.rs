use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub img_url: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::board_user::Entity",
        from = "Column::AuthorId",
        to = "super::board_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BoardUser,
}

impl Related<super::board_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
