use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Troop class a formation is built around. Stored as its wire value so the
/// database stays readable alongside API payloads.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArmyType {
    #[sea_orm(string_value = "CAVALRY")]
    Cavalry,
    #[sea_orm(string_value = "SHIELD")]
    Shield,
    #[sea_orm(string_value = "ARCHER")]
    Archer,
    #[sea_orm(string_value = "SPEAR")]
    Spear,
    #[sea_orm(string_value = "SIEGE")]
    Siege,
}

/// A squad of 1 to 3 generals. `rank_score` and `vote_count` are cached
/// aggregates over `formation_vote` rows, refreshed by full recompute on every
/// vote; the vote table stays authoritative.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "formation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub army_type: ArmyType,
    pub is_public: bool,
    pub is_curated: bool,
    /// Owner; curated formations may be unowned.
    pub user_id: Option<i32>,
    pub rank_score: i32,
    pub vote_count: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::formation_slot::Entity")]
    FormationSlot,
    #[sea_orm(has_many = "super::formation_vote::Entity")]
    FormationVote,
    #[sea_orm(has_many = "super::line_up_formation::Entity")]
    LineUpFormation,
    #[sea_orm(
        belongs_to = "super::muster_user::Entity",
        from = "Column::UserId",
        to = "super::muster_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MusterUser,
}

impl Related<super::formation_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormationSlot.def()
    }
}

impl Related<super::formation_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormationVote.def()
    }
}

impl Related<super::line_up_formation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineUpFormation.def()
    }
}

impl Related<super::muster_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MusterUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
