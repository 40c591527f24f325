//! Formation service layer.
//!
//! This module contains business logic for formation management: slot
//! validation against the roster, creation and editing with visibility and
//! curation rules, list filtering and ranking, and vote aggregation.

pub mod validator;
pub mod vote;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PaginationDto,
        formation::{
            AdminCreateFormationDto, AdminUpdateFormationDto, CreateFormationDto, FormationDto,
            FormationListDto, FormationListQuery, FormationOwnerDto, FormationSlotDto,
            FormationSlotInputDto, UpdateFormationDto,
        },
        roster::{GeneralDto, SkillDto},
    },
    server::{
        data::{
            formation::{
                vote::FormationVoteRepository, FormationChanges, FormationQuery,
                FormationRepository, FormationSort, NewFormation, NewFormationSlot,
            },
            roster::{general::GeneralRepository, skill::SkillRepository},
            user::UserRepository,
        },
        error::{formation::FormationError, Error},
    },
};

/// A formation's slots joined against the roster, with the summed cost
#[derive(Default)]
pub struct ExpandedSlots {
    pub slots: Vec<FormationSlotDto>,
    pub total_cost: i32,
}

pub struct FormationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormationService<'a> {
    /// Creates a new instance of [`FormationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a formation owned by the caller. Community formations start
    /// private unless the caller asks otherwise, and are never curated.
    ///
    /// # Returns
    /// - `Ok(FormationDto)`: The created formation with slots expanded
    /// - `Err(Error)`: Validation failed or a database error occurred
    pub async fn create(&self, user_id: i32, dto: CreateFormationDto) -> Result<FormationDto, Error> {
        let new = NewFormation {
            name: dto.name,
            description: dto.description,
            army_type: dto.army_type,
            is_public: dto.is_public.unwrap_or(false),
            is_curated: false,
            user_id: Some(user_id),
        };

        let formation_id = self.insert_validated(new, &dto.slots).await?;

        self.load_dto(formation_id, Some(user_id)).await
    }

    /// Creates a formation on behalf of the site. Defaults to public and
    /// curated, with an optional owner.
    pub async fn admin_create(&self, dto: AdminCreateFormationDto) -> Result<FormationDto, Error> {
        if let Some(owner_id) = dto.user_id {
            self.require_owner(owner_id).await?;
        }

        let new = NewFormation {
            name: dto.name,
            description: dto.description,
            army_type: dto.army_type,
            is_public: dto.is_public.unwrap_or(true),
            is_curated: dto.is_curated.unwrap_or(true),
            user_id: dto.user_id,
        };

        let formation_id = self.insert_validated(new, &dto.slots).await?;

        self.load_dto(formation_id, None).await
    }

    /// Gets a formation visible to the viewer
    ///
    /// # Returns
    /// - `Ok(FormationDto)`: The formation with slots expanded
    /// - `Err(Error::FormationError(NotFound))`: Missing, or private and not
    ///   the viewer's own
    pub async fn get(
        &self,
        formation_id: i32,
        viewer: Option<&entity::muster_user::Model>,
    ) -> Result<FormationDto, Error> {
        let Some((formation, owner)) = FormationRepository::new(self.db)
            .get_with_owner(formation_id)
            .await?
        else {
            return Err(FormationError::NotFound.into());
        };

        if !can_view(&formation, viewer) {
            return Err(FormationError::NotFound.into());
        }

        self.assemble(formation, owner, viewer.map(|user| user.id))
            .await
    }

    /// Lists formations the viewer may see under the given filters.
    ///
    /// Anonymous callers and callers browsing someone else's formations see
    /// public rows only; browsing your own includes private ones.
    pub async fn list(
        &self,
        query: FormationListQuery,
        viewer: Option<&entity::muster_user::Model>,
    ) -> Result<FormationListDto, Error> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(20).clamp(1, 100);

        let public_only = match (query.user_id, viewer) {
            (Some(owner_id), Some(user)) => user.id != owner_id,
            _ => true,
        };

        let repo_query = FormationQuery {
            search: query.search,
            army_type: query.army_type,
            curated_only: query.curated.unwrap_or(false),
            owner_id: query.user_id,
            public_only,
            sort: parse_sort(query.sort.as_deref()),
            offset: (page - 1) * limit,
            limit,
        };

        self.list_page(repo_query, page, limit, viewer.map(|user| user.id))
            .await
    }

    /// Lists formations without any visibility constraint, for the admin
    /// dashboard
    pub async fn admin_list(&self, query: FormationListQuery) -> Result<FormationListDto, Error> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(50).clamp(1, 100);

        let repo_query = FormationQuery {
            search: query.search,
            army_type: query.army_type,
            curated_only: query.curated.unwrap_or(false),
            owner_id: query.user_id,
            public_only: false,
            sort: parse_sort(query.sort.as_deref()),
            offset: (page - 1) * limit,
            limit,
        };

        self.list_page(repo_query, page, limit, None).await
    }

    /// Edits a formation owned by the caller. Curated formations stay
    /// metadata-editable for their owner, but their slot set is locked.
    ///
    /// # Returns
    /// - `Ok(FormationDto)`: The updated formation with slots expanded
    /// - `Err(Error::FormationError(NotFound))`: Missing or not the caller's
    /// - `Err(Error::FormationError(CuratedReadOnly))`: Slot edit on a
    ///   curated formation
    /// - `Err(Error)`: Validation failed or a database error occurred
    pub async fn update(
        &self,
        formation_id: i32,
        user_id: i32,
        dto: UpdateFormationDto,
    ) -> Result<FormationDto, Error> {
        let Some(formation) = FormationRepository::new(self.db).get(formation_id).await? else {
            return Err(FormationError::NotFound.into());
        };

        // Ownership misses read as missing so formation existence stays private.
        if formation.user_id != Some(user_id) {
            return Err(FormationError::NotFound.into());
        }

        if formation.is_curated && dto.slots.is_some() {
            return Err(FormationError::CuratedReadOnly.into());
        }

        if let Some(slots) = &dto.slots {
            self.validate(slots).await?;
        }

        let changes = FormationChanges {
            name: dto.name,
            description: dto.description,
            army_type: dto.army_type,
            is_public: dto.is_public,
            ..Default::default()
        };

        self.apply_update(formation_id, changes, dto.slots.as_deref())
            .await?;

        self.load_dto(formation_id, Some(user_id)).await
    }

    /// Edits any formation, including curation, visibility, and owner
    /// reassignment
    pub async fn admin_update(
        &self,
        formation_id: i32,
        dto: AdminUpdateFormationDto,
    ) -> Result<FormationDto, Error> {
        if FormationRepository::new(self.db)
            .get(formation_id)
            .await?
            .is_none()
        {
            return Err(FormationError::NotFound.into());
        }

        if let Some(Some(owner_id)) = dto.user_id {
            self.require_owner(owner_id).await?;
        }

        if let Some(slots) = &dto.slots {
            self.validate(slots).await?;
        }

        let changes = FormationChanges {
            name: dto.name,
            description: dto.description,
            army_type: dto.army_type,
            is_public: dto.is_public,
            is_curated: dto.is_curated,
            user_id: dto.user_id,
        };

        self.apply_update(formation_id, changes, dto.slots.as_deref())
            .await?;

        self.load_dto(formation_id, None).await
    }

    /// Deletes a formation the caller owns, or any formation for admins.
    /// Slots, votes, and line-up memberships cascade away with it.
    pub async fn delete(
        &self,
        formation_id: i32,
        user: &entity::muster_user::Model,
    ) -> Result<(), Error> {
        let Some(formation) = FormationRepository::new(self.db).get(formation_id).await? else {
            return Err(FormationError::NotFound.into());
        };

        if !user.is_admin && formation.user_id != Some(user.id) {
            return Err(FormationError::NotFound.into());
        }

        FormationRepository::new(self.db).delete(formation_id).await?;

        Ok(())
    }

    /// Copies a public or own formation into the caller's collection as a
    /// private, non-curated formation named "<name> (copy)"
    pub async fn copy(&self, formation_id: i32, user_id: i32) -> Result<FormationDto, Error> {
        let Some(original) = FormationRepository::new(self.db).get(formation_id).await? else {
            return Err(FormationError::NotFound.into());
        };

        if !original.is_public && original.user_id != Some(user_id) {
            return Err(FormationError::NotFound.into());
        }

        let slots = FormationRepository::new(self.db).get_slots(formation_id).await?;
        let new_slots: Vec<NewFormationSlot> = slots
            .iter()
            .map(|slot| NewFormationSlot {
                general_id: slot.general_id,
                position: slot.position,
                skill1_id: slot.skill1_id,
                skill2_id: slot.skill2_id,
            })
            .collect();

        let txn = self.db.begin().await?;

        let copy = FormationRepository::new(&txn)
            .create(NewFormation {
                name: format!("{} (copy)", original.name),
                description: original.description,
                army_type: original.army_type,
                is_public: false,
                is_curated: false,
                user_id: Some(user_id),
            })
            .await?;
        FormationRepository::new(&txn)
            .insert_slots(copy.id, &new_slots)
            .await?;

        txn.commit().await?;

        self.load_dto(copy.id, Some(user_id)).await
    }

    /// Joins the slots of every requested formation against the roster,
    /// keyed by formation ID
    pub async fn expand_slots(
        &self,
        formation_ids: &[i32],
    ) -> Result<HashMap<i32, ExpandedSlots>, Error> {
        let slots = FormationRepository::new(self.db)
            .get_slots_many(formation_ids)
            .await?;

        let general_ids: Vec<i32> = slots.iter().map(|slot| slot.general_id).collect();
        let skill_ids: Vec<i32> = slots
            .iter()
            .flat_map(|slot| [slot.skill1_id, slot.skill2_id])
            .flatten()
            .collect();

        let generals: HashMap<i32, entity::general::Model> = GeneralRepository::new(self.db)
            .get_many(&general_ids)
            .await?
            .into_iter()
            .map(|general| (general.id, general))
            .collect();
        let skills: HashMap<i32, entity::skill::Model> = SkillRepository::new(self.db)
            .get_many(&skill_ids)
            .await?
            .into_iter()
            .map(|skill| (skill.id, skill))
            .collect();

        let mut expanded: HashMap<i32, ExpandedSlots> = HashMap::new();
        for slot in slots {
            let general = generals.get(&slot.general_id).ok_or_else(|| {
                Error::InternalError(format!(
                    "Slot {} references general {} which does not exist",
                    slot.id, slot.general_id
                ))
            })?;

            let entry = expanded.entry(slot.formation_id).or_default();
            entry.total_cost += general.cost;
            entry.slots.push(FormationSlotDto {
                id: slot.id,
                position: slot.position,
                general: GeneralDto {
                    id: general.id,
                    name: general.name.clone(),
                    cost: general.cost,
                },
                skill1: slot.skill1_id.and_then(|id| skills.get(&id)).map(to_skill_dto),
                skill2: slot.skill2_id.and_then(|id| skills.get(&id)).map(to_skill_dto),
            });
        }

        Ok(expanded)
    }

    /// Loads a formation into its response shape without visibility checks,
    /// for returning freshly written rows
    async fn load_dto(&self, formation_id: i32, viewer_id: Option<i32>) -> Result<FormationDto, Error> {
        let Some((formation, owner)) = FormationRepository::new(self.db)
            .get_with_owner(formation_id)
            .await?
        else {
            return Err(FormationError::NotFound.into());
        };

        self.assemble(formation, owner, viewer_id).await
    }

    async fn assemble(
        &self,
        formation: entity::formation::Model,
        owner: Option<entity::muster_user::Model>,
        viewer_id: Option<i32>,
    ) -> Result<FormationDto, Error> {
        let mut expanded = self.expand_slots(&[formation.id]).await?;
        let slots = expanded.remove(&formation.id).unwrap_or_default();

        let user_vote = match viewer_id {
            Some(user_id) => FormationVoteRepository::new(self.db)
                .get_user_vote(formation.id, user_id)
                .await?
                .map(|vote| vote.value),
            None => None,
        };

        Ok(build_dto(formation, owner, slots, user_vote))
    }

    async fn list_page(
        &self,
        query: FormationQuery,
        page: u64,
        limit: u64,
        viewer_id: Option<i32>,
    ) -> Result<FormationListDto, Error> {
        let (rows, total) = FormationRepository::new(self.db).list(&query).await?;

        let formation_ids: Vec<i32> = rows.iter().map(|(formation, _)| formation.id).collect();
        let mut expanded = self.expand_slots(&formation_ids).await?;

        let mut votes: HashMap<i32, i32> = HashMap::new();
        if let Some(user_id) = viewer_id {
            votes = FormationVoteRepository::new(self.db)
                .get_user_votes(&formation_ids, user_id)
                .await?
                .into_iter()
                .map(|vote| (vote.formation_id, vote.value))
                .collect();
        }

        let formations = rows
            .into_iter()
            .map(|(formation, owner)| {
                let user_vote = votes.get(&formation.id).copied();
                let slots = expanded.remove(&formation.id).unwrap_or_default();
                build_dto(formation, owner, slots, user_vote)
            })
            .collect();

        Ok(FormationListDto {
            formations,
            pagination: PaginationDto {
                page,
                limit,
                total,
                total_pages: total.div_ceil(limit),
            },
        })
    }

    async fn validate(&self, slots: &[FormationSlotInputDto]) -> Result<(), Error> {
        let general_ids: Vec<i32> = slots.iter().map(|slot| slot.general_id).collect();
        let cost_map = GeneralRepository::new(self.db).get_cost_map(&general_ids).await?;

        validator::validate_slots(slots, &cost_map)?;

        Ok(())
    }

    async fn insert_validated(
        &self,
        new: NewFormation,
        slots: &[FormationSlotInputDto],
    ) -> Result<i32, Error> {
        self.validate(slots).await?;

        let txn = self.db.begin().await?;

        let formation = FormationRepository::new(&txn).create(new).await?;
        FormationRepository::new(&txn)
            .insert_slots(formation.id, &to_new_slots(slots))
            .await?;

        txn.commit().await?;

        Ok(formation.id)
    }

    async fn apply_update(
        &self,
        formation_id: i32,
        changes: FormationChanges,
        slots: Option<&[FormationSlotInputDto]>,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if let Some(slots) = slots {
            FormationRepository::new(&txn).delete_slots(formation_id).await?;
            FormationRepository::new(&txn)
                .insert_slots(formation_id, &to_new_slots(slots))
                .await?;
        }

        FormationRepository::new(&txn)
            .update(formation_id, changes)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    async fn require_owner(&self, owner_id: i32) -> Result<(), Error> {
        if UserRepository::new(self.db).get(owner_id).await?.is_none() {
            return Err(FormationError::OwnerNotFound(owner_id).into());
        }

        Ok(())
    }
}

/// Private formations are only visible to their owner and admins
fn can_view(
    formation: &entity::formation::Model,
    viewer: Option<&entity::muster_user::Model>,
) -> bool {
    formation.is_public
        || viewer.is_some_and(|user| user.is_admin || formation.user_id == Some(user.id))
}

fn parse_sort(sort: Option<&str>) -> FormationSort {
    match sort {
        Some("newest") => FormationSort::Newest,
        Some("oldest") => FormationSort::Oldest,
        _ => FormationSort::Rank,
    }
}

fn to_skill_dto(skill: &entity::skill::Model) -> SkillDto {
    SkillDto {
        id: skill.id,
        name: skill.name.clone(),
    }
}

fn to_new_slots(slots: &[FormationSlotInputDto]) -> Vec<NewFormationSlot> {
    slots
        .iter()
        .map(|slot| NewFormationSlot {
            general_id: slot.general_id,
            position: slot.position,
            skill1_id: slot.skill1_id,
            skill2_id: slot.skill2_id,
        })
        .collect()
}

fn build_dto(
    formation: entity::formation::Model,
    owner: Option<entity::muster_user::Model>,
    expanded: ExpandedSlots,
    user_vote: Option<i32>,
) -> FormationDto {
    FormationDto {
        id: formation.id,
        name: formation.name,
        description: formation.description,
        army_type: formation.army_type,
        is_public: formation.is_public,
        is_curated: formation.is_curated,
        rank_score: formation.rank_score,
        vote_count: formation.vote_count,
        created_at: formation.created_at,
        updated_at: formation.updated_at,
        user: owner.map(|user| FormationOwnerDto {
            id: user.id,
            display_name: user.display_name,
        }),
        slots: expanded.slots,
        user_vote,
        total_cost: expanded.total_cost,
    }
}
