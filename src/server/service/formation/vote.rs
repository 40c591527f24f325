//! Vote casting and rank recomputation for curated formations.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::formation::VoteResultDto,
    server::{
        data::formation::{vote::FormationVoteRepository, FormationRepository},
        error::{formation::FormationError, Error},
    },
};

pub struct VoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoteService<'a> {
    /// Creates a new instance of [`VoteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Casts or overwrites the caller's vote on a curated formation, then
    /// recomputes the stored aggregates from the full vote set. The vote
    /// rows stay authoritative; `rank_score` and `vote_count` are only ever
    /// written from a recompute here.
    ///
    /// # Returns
    /// - `Ok(VoteResultDto)`: The recomputed aggregates and the vote as stored
    /// - `Err(Error::FormationError(InvalidVoteValue))`: Value was not +1 or -1
    /// - `Err(Error::FormationError(NotFound))`: No such formation
    /// - `Err(Error::FormationError(NotCurated))`: Community formations take no votes
    pub async fn vote(
        &self,
        formation_id: i32,
        user_id: i32,
        value: i32,
    ) -> Result<VoteResultDto, Error> {
        if value != 1 && value != -1 {
            return Err(FormationError::InvalidVoteValue(value).into());
        }

        let Some(formation) = FormationRepository::new(self.db).get(formation_id).await? else {
            return Err(FormationError::NotFound.into());
        };

        if !formation.is_curated {
            return Err(FormationError::NotCurated.into());
        }

        let txn = self.db.begin().await?;

        FormationVoteRepository::new(&txn)
            .upsert(formation_id, user_id, value)
            .await?;

        let votes = FormationVoteRepository::new(&txn)
            .get_for_formation(formation_id)
            .await?;
        let rank_score = votes.iter().map(|vote| vote.value).sum();
        let vote_count = votes.len() as i32;

        FormationRepository::new(&txn)
            .update_rank(formation_id, rank_score, vote_count)
            .await?;

        txn.commit().await?;

        Ok(VoteResultDto {
            rank_score,
            vote_count,
            user_vote: value,
        })
    }
}
