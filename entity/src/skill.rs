//! Roster entity for an assignable skill. As with generals, only the fields
//! consumed by the core are modeled.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skill")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::line_up_skill_resolution::Entity")]
    LineUpSkillResolution,
}

impl Related<super::line_up_skill_resolution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineUpSkillResolution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
