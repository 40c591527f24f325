//! Formation fixture utilities covering formations, slots, and votes.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FormationModel, FormationSlotModel, FormationVoteModel},
    TestSetup,
};

impl TestSetup {
    pub fn formation(&self) -> FormationFixtures<'_> {
        FormationFixtures { setup: self }
    }
}

pub struct FormationFixtures<'a> {
    pub setup: &'a TestSetup,
}

impl<'a> FormationFixtures<'a> {
    /// Insert a public, non-curated formation owned by the given user.
    ///
    /// # Returns
    /// - `Ok(FormationModel)` - The created formation record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_formation(
        &self,
        user_id: Option<i32>,
        name: &str,
    ) -> Result<FormationModel, TestError> {
        self.insert(user_id, name, true, false).await
    }

    /// Insert a private, non-curated formation owned by the given user.
    ///
    /// # Returns
    /// - `Ok(FormationModel)` - The created formation record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_private_formation(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<FormationModel, TestError> {
        self.insert(Some(user_id), name, false, false).await
    }

    /// Insert a curated, public formation with no owner.
    ///
    /// # Returns
    /// - `Ok(FormationModel)` - The created formation record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_curated_formation(&self, name: &str) -> Result<FormationModel, TestError> {
        self.insert(None, name, true, true).await
    }

    /// Insert a slot assigning a general to a position in a formation.
    ///
    /// # Returns
    /// - `Ok(FormationSlotModel)` - The created slot record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_slot(
        &self,
        formation_id: i32,
        general_id: i32,
        position: i32,
        skill1_id: Option<i32>,
        skill2_id: Option<i32>,
    ) -> Result<FormationSlotModel, TestError> {
        Ok(
            entity::prelude::FormationSlot::insert(entity::formation_slot::ActiveModel {
                formation_id: ActiveValue::Set(formation_id),
                general_id: ActiveValue::Set(general_id),
                position: ActiveValue::Set(position),
                skill1_id: ActiveValue::Set(skill1_id),
                skill2_id: ActiveValue::Set(skill2_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a vote by a user on a formation.
    ///
    /// # Returns
    /// - `Ok(FormationVoteModel)` - The created vote record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_vote(
        &self,
        formation_id: i32,
        user_id: i32,
        value: i32,
    ) -> Result<FormationVoteModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::FormationVote::insert(entity::formation_vote::ActiveModel {
                formation_id: ActiveValue::Set(formation_id),
                user_id: ActiveValue::Set(user_id),
                value: ActiveValue::Set(value),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    async fn insert(
        &self,
        user_id: Option<i32>,
        name: &str,
        is_public: bool,
        is_curated: bool,
    ) -> Result<FormationModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Formation::insert(entity::formation::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(None),
                army_type: ActiveValue::Set(entity::formation::ArmyType::Cavalry),
                is_public: ActiveValue::Set(is_public),
                is_curated: ActiveValue::Set(is_curated),
                user_id: ActiveValue::Set(user_id),
                rank_score: ActiveValue::Set(0),
                vote_count: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
