use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "muster_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub display_name: String,
    pub is_admin: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::formation::Entity")]
    Formation,
    #[sea_orm(has_many = "super::formation_vote::Entity")]
    FormationVote,
    #[sea_orm(has_many = "super::line_up::Entity")]
    LineUp,
}

impl Related<super::formation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Formation.def()
    }
}

impl Related<super::formation_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormationVote.def()
    }
}

impl Related<super::line_up::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineUp.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
