//! One user's vote on one curated formation. The (formation_id, user_id) pair
//! is unique (see the migration's index): re-voting updates the row in place
//! rather than adding a second one.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "formation_vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub formation_id: i32,
    pub user_id: i32,
    /// +1 or -1.
    pub value: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::formation::Entity",
        from = "Column::FormationId",
        to = "super::formation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Formation,
    #[sea_orm(
        belongs_to = "super::muster_user::Entity",
        from = "Column::UserId",
        to = "super::muster_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MusterUser,
}

impl Related<super::formation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Formation.def()
    }
}

impl Related<super::muster_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MusterUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
