//! A named, ordered collection of formations owned by one user.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "line_up")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub user_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::muster_user::Entity",
        from = "Column::UserId",
        to = "super::muster_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MusterUser,
    #[sea_orm(has_many = "super::line_up_formation::Entity")]
    LineUpFormation,
    #[sea_orm(has_many = "super::line_up_skill_resolution::Entity")]
    LineUpSkillResolution,
}

impl Related<super::muster_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MusterUser.def()
    }
}

impl Related<super::line_up_formation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineUpFormation.def()
    }
}

impl Related<super::line_up_skill_resolution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineUpSkillResolution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
