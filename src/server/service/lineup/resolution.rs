//! Resolution bookkeeping for acknowledged skill conflicts.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        lineup::{resolution::LineUpSkillResolutionRepository, LineUpRepository},
        roster::skill::SkillRepository,
    },
    error::{lineup::LineUpError, Error},
};

pub struct ResolutionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResolutionService<'a> {
    /// Creates a new instance of [`ResolutionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that the owner accepts the skill overlap in this line-up.
    /// The skill does not have to be in conflict right now; a resolution
    /// recorded ahead of a formation swap stays valid.
    ///
    /// # Returns
    /// - `Ok(())`: Resolution stored, overwriting any earlier one
    /// - `Err(Error::LineUpError(NotFound))`: Missing or not the caller's line-up
    /// - `Err(Error::LineUpError(SkillNotFound))`: No such skill
    pub async fn resolve(
        &self,
        line_up_id: i32,
        user_id: i32,
        skill_id: i32,
        note: Option<String>,
    ) -> Result<(), Error> {
        self.require_owned(line_up_id, user_id).await?;

        if SkillRepository::new(self.db).get(skill_id).await?.is_none() {
            return Err(LineUpError::SkillNotFound(skill_id).into());
        }

        LineUpSkillResolutionRepository::new(self.db)
            .upsert(line_up_id, skill_id, note)
            .await?;

        Ok(())
    }

    /// Removes a previously recorded resolution, putting the conflict back
    /// to unresolved
    ///
    /// # Returns
    /// - `Ok(())`: Resolution removed
    /// - `Err(Error::LineUpError(NotFound))`: Missing or not the caller's line-up
    /// - `Err(Error::LineUpError(ResolutionNotFound))`: Nothing was recorded
    pub async fn unresolve(&self, line_up_id: i32, user_id: i32, skill_id: i32) -> Result<(), Error> {
        self.require_owned(line_up_id, user_id).await?;

        let result = LineUpSkillResolutionRepository::new(self.db)
            .delete(line_up_id, skill_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(LineUpError::ResolutionNotFound.into());
        }

        Ok(())
    }

    async fn require_owned(&self, line_up_id: i32, user_id: i32) -> Result<(), Error> {
        match LineUpRepository::new(self.db).get(line_up_id).await? {
            Some(line_up) if line_up.user_id == user_id => Ok(()),
            // Ownership misses read as missing so line-up existence stays private.
            _ => Err(LineUpError::NotFound.into()),
        }
    }
}
