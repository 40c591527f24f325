use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct FormationVoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FormationVoteRepository<'a, C> {
    /// Creates a new instance of [`FormationVoteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or overwrites the user's vote on a formation. The unique
    /// index on (formation_id, user_id) makes a re-vote update in place.
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored vote
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        formation_id: i32,
        user_id: i32,
        value: i32,
    ) -> Result<entity::formation_vote::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let vote = entity::formation_vote::ActiveModel {
            formation_id: ActiveValue::Set(formation_id),
            user_id: ActiveValue::Set(user_id),
            value: ActiveValue::Set(value),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::FormationVote::insert(vote)
            .on_conflict(
                OnConflict::columns([
                    entity::formation_vote::Column::FormationId,
                    entity::formation_vote::Column::UserId,
                ])
                .update_columns([
                    entity::formation_vote::Column::Value,
                    entity::formation_vote::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Gets every vote cast on a formation
    pub async fn get_for_formation(
        &self,
        formation_id: i32,
    ) -> Result<Vec<entity::formation_vote::Model>, DbErr> {
        entity::prelude::FormationVote::find()
            .filter(entity::formation_vote::Column::FormationId.eq(formation_id))
            .all(self.db)
            .await
    }

    /// Gets the user's vote on a formation, if one exists
    pub async fn get_user_vote(
        &self,
        formation_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::formation_vote::Model>, DbErr> {
        entity::prelude::FormationVote::find()
            .filter(entity::formation_vote::Column::FormationId.eq(formation_id))
            .filter(entity::formation_vote::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets the user's votes across the requested formations
    pub async fn get_user_votes(
        &self,
        formation_ids: &[i32],
        user_id: i32,
    ) -> Result<Vec<entity::formation_vote::Model>, DbErr> {
        entity::prelude::FormationVote::find()
            .filter(
                entity::formation_vote::Column::FormationId.is_in(formation_ids.iter().copied()),
            )
            .filter(entity::formation_vote::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}
