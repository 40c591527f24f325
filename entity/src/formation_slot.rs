//! One general's assignment within a formation, with up to two skill
//! references. Slot rows are owned by their formation: replaced wholesale when
//! the formation's composition is edited and dropped by cascade on delete.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "formation_slot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub formation_id: i32,
    pub general_id: i32,
    /// Display position within the formation, 1 to 3.
    pub position: i32,
    pub skill1_id: Option<i32>,
    pub skill2_id: Option<i32>,
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
        belongs_to = "super::general::Entity",
        from = "Column::GeneralId",
        to = "super::general::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    General,
    #[sea_orm(
        belongs_to = "super::skill::Entity",
        from = "Column::Skill1Id",
        to = "super::skill::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Skill1,
    #[sea_orm(
        belongs_to = "super::skill::Entity",
        from = "Column::Skill2Id",
        to = "super::skill::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Skill2,
}

impl Related<super::formation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Formation.def()
    }
}

impl Related<super::general::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::General.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
