use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter};

pub struct LineUpSkillResolutionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LineUpSkillResolutionRepository<'a, C> {
    /// Creates a new instance of [`LineUpSkillResolutionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or overwrites the resolution for a (line-up, skill) pair,
    /// marking it resolved. The unique index on the pair makes repeat
    /// resolutions update in place.
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored resolution
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        line_up_id: i32,
        skill_id: i32,
        note: Option<String>,
    ) -> Result<entity::line_up_skill_resolution::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let resolution = entity::line_up_skill_resolution::ActiveModel {
            line_up_id: ActiveValue::Set(line_up_id),
            skill_id: ActiveValue::Set(skill_id),
            resolved: ActiveValue::Set(true),
            note: ActiveValue::Set(note),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::LineUpSkillResolution::insert(resolution)
            .on_conflict(
                OnConflict::columns([
                    entity::line_up_skill_resolution::Column::LineUpId,
                    entity::line_up_skill_resolution::Column::SkillId,
                ])
                .update_columns([
                    entity::line_up_skill_resolution::Column::Resolved,
                    entity::line_up_skill_resolution::Column::Note,
                    entity::line_up_skill_resolution::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Deletes the resolution for a (line-up, skill) pair
    pub async fn delete(&self, line_up_id: i32, skill_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LineUpSkillResolution::delete_many()
            .filter(entity::line_up_skill_resolution::Column::LineUpId.eq(line_up_id))
            .filter(entity::line_up_skill_resolution::Column::SkillId.eq(skill_id))
            .exec(self.db)
            .await
    }

    /// Deletes every resolution of a line-up
    pub async fn delete_for_line_up(&self, line_up_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LineUpSkillResolution::delete_many()
            .filter(entity::line_up_skill_resolution::Column::LineUpId.eq(line_up_id))
            .exec(self.db)
            .await
    }

    /// Gets every resolution recorded for a line-up
    pub async fn get_for_line_up(
        &self,
        line_up_id: i32,
    ) -> Result<Vec<entity::line_up_skill_resolution::Model>, DbErr> {
        entity::prelude::LineUpSkillResolution::find()
            .filter(entity::line_up_skill_resolution::Column::LineUpId.eq(line_up_id))
            .all(self.db)
            .await
    }
}
