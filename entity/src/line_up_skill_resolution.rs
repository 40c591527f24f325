//! A user's acknowledgement of one duplicated skill within a line-up. One row
//! per (line_up_id, skill_id), enforced by a unique index; resolving again
//! overwrites the previous row.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "line_up_skill_resolution")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub line_up_id: i32,
    pub skill_id: i32,
    pub resolved: bool,
    pub note: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
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
        belongs_to = "super::skill::Entity",
        from = "Column::SkillId",
        to = "super::skill::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Skill,
}

impl Related<super::line_up::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineUp.def()
    }
}

impl Related<super::skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
