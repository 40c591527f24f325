//! Membership row tying a formation into a line-up at a given march position.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "line_up_formation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub line_up_id: i32,
    pub formation_id: i32,
    /// 1-based march order within the line-up.
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::line_up::Entity",
        from = "Column::LineUpId",
        to = "super::line_up::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LineUp,
    #[sea_orm(
        belongs_to = "super::formation::Entity",
        from = "Column::FormationId",
        to = "super::formation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Formation,
}

impl Related<super::line_up::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineUp.def()
    }
}

impl Related<super::formation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Formation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
