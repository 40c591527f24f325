//! Roster fixture utilities for generals and skills.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{GeneralModel, SkillModel},
    TestSetup,
};

impl TestSetup {
    pub fn roster(&self) -> RosterFixtures<'_> {
        RosterFixtures { setup: self }
    }
}

pub struct RosterFixtures<'a> {
    pub setup: &'a TestSetup,
}

impl<'a> RosterFixtures<'a> {
    /// Insert a general with the given name and deployment cost.
    ///
    /// # Returns
    /// - `Ok(GeneralModel)` - The created general record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_general(&self, name: &str, cost: i32) -> Result<GeneralModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::General::insert(entity::general::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                cost: ActiveValue::Set(cost),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a skill with the given name.
    ///
    /// # Returns
    /// - `Ok(SkillModel)` - The created skill record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_skill(&self, name: &str) -> Result<SkillModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Skill::insert(entity::skill::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
