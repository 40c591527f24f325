use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

pub struct SkillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SkillRepository<'a, C> {
    /// Creates a new instance of [`SkillRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new skill
    ///
    /// # Returns
    /// - `Ok(Model)`: The created skill
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, name: &str) -> Result<entity::skill::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let skill = entity::skill::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        skill.insert(self.db).await
    }

    /// Gets a skill by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The skill
    /// - `Ok(None)`: No skill with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn get(&self, skill_id: i32) -> Result<Option<entity::skill::Model>, DbErr> {
        entity::prelude::Skill::find_by_id(skill_id)
            .one(self.db)
            .await
    }

    /// Gets the full rows for the requested IDs. Unknown IDs are simply
    /// absent from the result.
    pub async fn get_many(&self, skill_ids: &[i32]) -> Result<Vec<entity::skill::Model>, DbErr> {
        entity::prelude::Skill::find()
            .filter(entity::skill::Column::Id.is_in(skill_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Gets the display name per skill for the requested IDs
    pub async fn get_name_map(&self, skill_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        let names: Vec<(i32, String)> = entity::prelude::Skill::find()
            .select_only()
            .column(entity::skill::Column::Id)
            .column(entity::skill::Column::Name)
            .filter(entity::skill::Column::Id.is_in(skill_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(names.into_iter().collect())
    }
}
