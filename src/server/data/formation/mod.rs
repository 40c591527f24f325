pub mod vote;

use chrono::Utc;
use entity::formation::ArmyType;
use migration::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    ExprTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Column values for a new formation row
pub struct NewFormation {
    pub name: String,
    pub description: Option<String>,
    pub army_type: ArmyType,
    pub is_public: bool,
    pub is_curated: bool,
    pub user_id: Option<i32>,
}

/// Column values for a new slot row
pub struct NewFormationSlot {
    pub general_id: i32,
    pub position: i32,
    pub skill1_id: Option<i32>,
    pub skill2_id: Option<i32>,
}

/// Optional column changes applied by [`FormationRepository::update`].
/// `user_id` is doubly optional so an admin can detach the owner.
#[derive(Default)]
pub struct FormationChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub army_type: Option<ArmyType>,
    pub is_public: Option<bool>,
    pub is_curated: Option<bool>,
    pub user_id: Option<Option<i32>>,
}

/// Sort orders accepted by [`FormationRepository::list`]
pub enum FormationSort {
    /// Highest rank score first, vote count as tie-breaker
    Rank,
    Newest,
    Oldest,
}

/// Filters and paging for [`FormationRepository::list`]
pub struct FormationQuery {
    /// Case-insensitive name substring
    pub search: Option<String>,
    pub army_type: Option<ArmyType>,
    pub curated_only: bool,
    pub owner_id: Option<i32>,
    /// When true, private formations are excluded
    pub public_only: bool,
    pub sort: FormationSort,
    pub offset: u64,
    pub limit: u64,
}

pub struct FormationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FormationRepository<'a, C> {
    /// Creates a new instance of [`FormationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new formation with zeroed vote aggregates
    ///
    /// # Returns
    /// - `Ok(Model)`: The created formation
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, new: NewFormation) -> Result<entity::formation::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let formation = entity::formation::ActiveModel {
            name: ActiveValue::Set(new.name),
            description: ActiveValue::Set(new.description),
            army_type: ActiveValue::Set(new.army_type),
            is_public: ActiveValue::Set(new.is_public),
            is_curated: ActiveValue::Set(new.is_curated),
            user_id: ActiveValue::Set(new.user_id),
            rank_score: ActiveValue::Set(0),
            vote_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        formation.insert(self.db).await
    }

    /// Gets a formation by ID
    pub async fn get(&self, formation_id: i32) -> Result<Option<entity::formation::Model>, DbErr> {
        entity::prelude::Formation::find_by_id(formation_id)
            .one(self.db)
            .await
    }

    /// Gets a formation together with its owner, if it has one
    pub async fn get_with_owner(
        &self,
        formation_id: i32,
    ) -> Result<Option<(entity::formation::Model, Option<entity::muster_user::Model>)>, DbErr>
    {
        entity::prelude::Formation::find_by_id(formation_id)
            .find_also_related(entity::prelude::MusterUser)
            .one(self.db)
            .await
    }

    /// Gets the formations matching the requested IDs. Unknown IDs are
    /// simply absent from the result.
    pub async fn get_many(
        &self,
        formation_ids: &[i32],
    ) -> Result<Vec<entity::formation::Model>, DbErr> {
        entity::prelude::Formation::find()
            .filter(entity::formation::Column::Id.is_in(formation_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Gets the formations matching the requested IDs together with their
    /// owners
    pub async fn get_many_with_owners(
        &self,
        formation_ids: &[i32],
    ) -> Result<Vec<(entity::formation::Model, Option<entity::muster_user::Model>)>, DbErr> {
        entity::prelude::Formation::find()
            .filter(entity::formation::Column::Id.is_in(formation_ids.iter().copied()))
            .find_also_related(entity::prelude::MusterUser)
            .all(self.db)
            .await
    }

    /// Applies the given changes and bumps `updated_at`
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated formation
    /// - `Ok(None)`: No formation with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        formation_id: i32,
        changes: FormationChanges,
    ) -> Result<Option<entity::formation::Model>, DbErr> {
        let formation = match self.get(formation_id).await? {
            Some(formation) => formation,
            None => return Ok(None),
        };

        let mut formation_am = formation.into_active_model();

        if let Some(name) = changes.name {
            formation_am.name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.description {
            formation_am.description = ActiveValue::Set(Some(description));
        }
        if let Some(army_type) = changes.army_type {
            formation_am.army_type = ActiveValue::Set(army_type);
        }
        if let Some(is_public) = changes.is_public {
            formation_am.is_public = ActiveValue::Set(is_public);
        }
        if let Some(is_curated) = changes.is_curated {
            formation_am.is_curated = ActiveValue::Set(is_curated);
        }
        if let Some(user_id) = changes.user_id {
            formation_am.user_id = ActiveValue::Set(user_id);
        }
        formation_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let formation = formation_am.update(self.db).await?;

        Ok(Some(formation))
    }

    /// Overwrites the stored vote aggregates
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated formation
    /// - `Ok(None)`: No formation with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn update_rank(
        &self,
        formation_id: i32,
        rank_score: i32,
        vote_count: i32,
    ) -> Result<Option<entity::formation::Model>, DbErr> {
        let formation = match self.get(formation_id).await? {
            Some(formation) => formation,
            None => return Ok(None),
        };

        let mut formation_am = formation.into_active_model();
        formation_am.rank_score = ActiveValue::Set(rank_score);
        formation_am.vote_count = ActiveValue::Set(vote_count);

        let formation = formation_am.update(self.db).await?;

        Ok(Some(formation))
    }

    /// Deletes a formation; slots, votes, and line-up memberships cascade
    pub async fn delete(&self, formation_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Formation::delete_by_id(formation_id)
            .exec(self.db)
            .await
    }

    /// Lists formations with their owners under the given filters
    ///
    /// # Returns
    /// - `Ok((rows, total))`: One page of rows plus the unpaged match count
    /// - `Err(DbErr)`: Database error
    pub async fn list(
        &self,
        query: &FormationQuery,
    ) -> Result<
        (
            Vec<(entity::formation::Model, Option<entity::muster_user::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let mut select = entity::prelude::Formation::find();

        if query.public_only {
            select = select.filter(entity::formation::Column::IsPublic.eq(true));
        }
        if let Some(owner_id) = query.owner_id {
            select = select.filter(entity::formation::Column::UserId.eq(owner_id));
        }
        if query.curated_only {
            select = select.filter(entity::formation::Column::IsCurated.eq(true));
        }
        if let Some(army_type) = query.army_type {
            select = select.filter(entity::formation::Column::ArmyType.eq(army_type));
        }
        if let Some(search) = &query.search {
            select = select.filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::prelude::Formation,
                    entity::formation::Column::Name,
                ))))
                .like(format!("%{}%", search.to_lowercase())),
            );
        }

        let total = select.clone().count(self.db).await?;

        let select = match query.sort {
            FormationSort::Rank => select
                .order_by_desc(entity::formation::Column::RankScore)
                .order_by_desc(entity::formation::Column::VoteCount),
            FormationSort::Newest => select.order_by_desc(entity::formation::Column::CreatedAt),
            FormationSort::Oldest => select.order_by_asc(entity::formation::Column::CreatedAt),
        };

        let rows = select
            .find_also_related(entity::prelude::MusterUser)
            .offset(query.offset)
            .limit(query.limit)
            .all(self.db)
            .await?;

        Ok((rows, total))
    }

    /// Inserts the given slots for a formation
    pub async fn insert_slots(
        &self,
        formation_id: i32,
        slots: &[NewFormationSlot],
    ) -> Result<Vec<entity::formation_slot::Model>, DbErr> {
        if slots.is_empty() {
            return Ok(Vec::new());
        }

        let slot_ams: Vec<entity::formation_slot::ActiveModel> = slots
            .iter()
            .map(|slot| entity::formation_slot::ActiveModel {
                formation_id: ActiveValue::Set(formation_id),
                general_id: ActiveValue::Set(slot.general_id),
                position: ActiveValue::Set(slot.position),
                skill1_id: ActiveValue::Set(slot.skill1_id),
                skill2_id: ActiveValue::Set(slot.skill2_id),
                ..Default::default()
            })
            .collect();

        entity::prelude::FormationSlot::insert_many(slot_ams)
            .exec_with_returning(self.db)
            .await
    }

    /// Deletes every slot of a formation
    pub async fn delete_slots(&self, formation_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FormationSlot::delete_many()
            .filter(entity::formation_slot::Column::FormationId.eq(formation_id))
            .exec(self.db)
            .await
    }

    /// Gets a formation's slots ordered by position
    pub async fn get_slots(
        &self,
        formation_id: i32,
    ) -> Result<Vec<entity::formation_slot::Model>, DbErr> {
        entity::prelude::FormationSlot::find()
            .filter(entity::formation_slot::Column::FormationId.eq(formation_id))
            .order_by_asc(entity::formation_slot::Column::Position)
            .all(self.db)
            .await
    }

    /// Gets the slots of every requested formation in one query, ordered by
    /// position within each formation
    pub async fn get_slots_many(
        &self,
        formation_ids: &[i32],
    ) -> Result<Vec<entity::formation_slot::Model>, DbErr> {
        entity::prelude::FormationSlot::find()
            .filter(entity::formation_slot::Column::FormationId.is_in(formation_ids.iter().copied()))
            .order_by_asc(entity::formation_slot::Column::FormationId)
            .order_by_asc(entity::formation_slot::Column::Position)
            .all(self.db)
            .await
    }
}
