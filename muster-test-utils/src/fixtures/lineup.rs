//! Line-up fixture utilities covering line-ups, memberships, and resolutions.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{LineUpFormationModel, LineUpModel, LineUpSkillResolutionModel},
    TestSetup,
};

impl TestSetup {
    pub fn lineup(&self) -> LineUpFixtures<'_> {
        LineUpFixtures { setup: self }
    }
}

pub struct LineUpFixtures<'a> {
    pub setup: &'a TestSetup,
}

impl<'a> LineUpFixtures<'a> {
    /// Insert a line-up owned by the given user.
    ///
    /// # Returns
    /// - `Ok(LineUpModel)` - The created line-up record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_line_up(&self, user_id: i32, name: &str) -> Result<LineUpModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::LineUp::insert(entity::line_up::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a membership row placing a formation in a line-up at a position.
    ///
    /// # Returns
    /// - `Ok(LineUpFormationModel)` - The created membership record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_line_up_formation(
        &self,
        line_up_id: i32,
        formation_id: i32,
        position: i32,
    ) -> Result<LineUpFormationModel, TestError> {
        Ok(
            entity::prelude::LineUpFormation::insert(entity::line_up_formation::ActiveModel {
                line_up_id: ActiveValue::Set(line_up_id),
                formation_id: ActiveValue::Set(formation_id),
                position: ActiveValue::Set(position),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a skill conflict resolution for a line-up.
    ///
    /// # Returns
    /// - `Ok(LineUpSkillResolutionModel)` - The created resolution record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_resolution(
        &self,
        line_up_id: i32,
        skill_id: i32,
        resolved: bool,
        note: Option<&str>,
    ) -> Result<LineUpSkillResolutionModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::LineUpSkillResolution::insert(
            entity::line_up_skill_resolution::ActiveModel {
                line_up_id: ActiveValue::Set(line_up_id),
                skill_id: ActiveValue::Set(skill_id),
                resolved: ActiveValue::Set(resolved),
                note: ActiveValue::Set(note.map(|n| n.to_string())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
