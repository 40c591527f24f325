//! Roster entity for a playable general. Only the fields the formation and
//! line-up core consumes are modeled here; the wider roster catalogue
//! (portraits, stats, factions) is managed elsewhere.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "general")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Deployment cost counted against a formation's budget of 21 points.
    pub cost: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::formation_slot::Entity")]
    FormationSlot,
}

impl Related<super::formation_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormationSlot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
