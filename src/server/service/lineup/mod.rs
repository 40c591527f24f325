//! Line-up service layer.
//!
//! This module contains business logic for line-ups: membership validation
//! against general conflicts, skill conflict reporting on every read, and
//! resolution bookkeeping.

pub mod conflict;
pub mod resolution;


use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        formation::FormationOwnerDto,
        lineup::{
            CreateLineUpDto, LineUpDetailDto, LineUpFormationDto, LineUpListDto, LineUpOverviewDto,
            LineUpSummaryDto, SkillResolutionDto, UpdateLineUpDto,
        },
    },
    server::{
        data::{
            formation::FormationRepository,
            lineup::{resolution::LineUpSkillResolutionRepository, LineUpRepository},
            roster::skill::SkillRepository,
        },
        error::{lineup::LineUpError, Error},
        service::formation::{ExpandedSlots, FormationService},
    },
};

use self::conflict::{detect_general_conflicts, detect_skill_conflicts, MemberFormation};

pub struct LineUpService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LineUpService<'a> {
    /// Creates a new instance of [`LineUpService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a line-up from the given formations, in input order.
    ///
    /// A general marching in two member formations blocks the create
    /// outright. Skill overlaps do not block; they come back in the summary
    /// as unresolved conflicts.
    ///
    /// # Returns
    /// - `Ok(LineUpSummaryDto)`: The created line-up with its skill report
    /// - `Err(Error::LineUpError(GeneralConflicts))`: Blocking general
    ///   overlap, nothing persisted
    /// - `Err(Error)`: Validation failed or a database error occurred
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateLineUpDto,
    ) -> Result<LineUpSummaryDto, Error> {
        if dto.name.trim().is_empty() {
            return Err(LineUpError::EmptyName.into());
        }
        if dto.formation_ids.is_empty() {
            return Err(LineUpError::NoFormations.into());
        }

        let members = self.load_members(&dto.formation_ids).await?;

        let general_conflicts = detect_general_conflicts(&members);
        if !general_conflicts.is_empty() {
            return Err(LineUpError::GeneralConflicts(general_conflicts).into());
        }

        let txn = self.db.begin().await?;

        let line_up = LineUpRepository::new(&txn).create(user_id, &dto.name).await?;
        LineUpRepository::new(&txn)
            .insert_members(line_up.id, &dto.formation_ids)
            .await?;

        txn.commit().await?;

        let skill_conflicts = detect_skill_conflicts(&members, &[]);

        Ok(LineUpSummaryDto {
            id: line_up.id,
            name: line_up.name,
            created_at: line_up.created_at,
            updated_at: line_up.updated_at,
            formation_count: members.len(),
            skill_conflicts,
        })
    }

    /// Edits a line-up the caller owns. A membership replacement goes through
    /// the same general-conflict gate as create and drops every recorded
    /// skill resolution, since the conflict set may have changed shape.
    pub async fn update(
        &self,
        line_up_id: i32,
        user_id: i32,
        dto: UpdateLineUpDto,
    ) -> Result<LineUpSummaryDto, Error> {
        self.require_owned(line_up_id, user_id).await?;

        if let Some(name) = &dto.name {
            if name.trim().is_empty() {
                return Err(LineUpError::EmptyName.into());
            }
        }

        let replacement = match &dto.formation_ids {
            Some(ids) if ids.is_empty() => return Err(LineUpError::NoFormations.into()),
            Some(ids) => {
                let members = self.load_members(ids).await?;

                let general_conflicts = detect_general_conflicts(&members);
                if !general_conflicts.is_empty() {
                    return Err(LineUpError::GeneralConflicts(general_conflicts).into());
                }

                Some(members)
            }
            None => None,
        };

        let txn = self.db.begin().await?;

        if let Some(ids) = &dto.formation_ids {
            LineUpRepository::new(&txn).delete_members(line_up_id).await?;
            LineUpSkillResolutionRepository::new(&txn)
                .delete_for_line_up(line_up_id)
                .await?;
            LineUpRepository::new(&txn).insert_members(line_up_id, ids).await?;
        }

        let Some(line_up) = LineUpRepository::new(&txn).update(line_up_id, dto.name).await? else {
            return Err(LineUpError::NotFound.into());
        };

        txn.commit().await?;

        let (members, resolutions) = match replacement {
            Some(members) => (members, Vec::new()),
            None => (
                self.current_members(line_up_id).await?,
                LineUpSkillResolutionRepository::new(self.db)
                    .get_for_line_up(line_up_id)
                    .await?,
            ),
        };

        let skill_conflicts = detect_skill_conflicts(&members, &resolutions);

        Ok(LineUpSummaryDto {
            id: line_up.id,
            name: line_up.name,
            created_at: line_up.created_at,
            updated_at: line_up.updated_at,
            formation_count: members.len(),
            skill_conflicts,
        })
    }

    /// Deletes a line-up the caller owns. Membership and resolution rows
    /// cascade away; the member formations themselves are untouched.
    pub async fn delete(&self, line_up_id: i32, user_id: i32) -> Result<(), Error> {
        self.require_owned(line_up_id, user_id).await?;

        LineUpRepository::new(self.db).delete(line_up_id).await?;

        Ok(())
    }

    /// Gets a line-up the caller owns, with members expanded and both
    /// conflict reports recomputed from the membership as it stands now.
    /// Member formations may have been edited since the last write, so
    /// general conflicts can show up here even though writes block them.
    pub async fn get(&self, line_up_id: i32, user_id: i32) -> Result<LineUpDetailDto, Error> {
        let line_up = self.require_owned(line_up_id, user_id).await?;

        let member_rows = LineUpRepository::new(self.db).get_members(line_up_id).await?;
        let formation_ids: Vec<i32> = member_rows
            .iter()
            .map(|member| member.formation_id)
            .collect();

        let formations: HashMap<i32, (entity::formation::Model, Option<entity::muster_user::Model>)> =
            FormationRepository::new(self.db)
                .get_many_with_owners(&formation_ids)
                .await?
                .into_iter()
                .map(|(formation, owner)| (formation.id, (formation, owner)))
                .collect();
        let mut expanded = FormationService::new(self.db)
            .expand_slots(&formation_ids)
            .await?;

        let resolutions = LineUpSkillResolutionRepository::new(self.db)
            .get_for_line_up(line_up_id)
            .await?;

        let members: Vec<MemberFormation> = member_rows
            .iter()
            .map(|member| MemberFormation {
                formation_id: member.formation_id,
                slots: expanded
                    .get(&member.formation_id)
                    .map(|entry| entry.slots.clone())
                    .unwrap_or_default(),
            })
            .collect();

        let general_conflicts = detect_general_conflicts(&members);
        let skill_conflicts = detect_skill_conflicts(&members, &resolutions);

        let skill_ids: Vec<i32> = resolutions
            .iter()
            .map(|resolution| resolution.skill_id)
            .collect();
        let skill_names = SkillRepository::new(self.db).get_name_map(&skill_ids).await?;
        let skill_resolutions = resolutions
            .into_iter()
            .map(|resolution| SkillResolutionDto {
                skill_id: resolution.skill_id,
                skill_name: skill_names
                    .get(&resolution.skill_id)
                    .cloned()
                    .unwrap_or_default(),
                resolved: resolution.resolved,
                note: resolution.note,
            })
            .collect();

        let mut formation_dtos = Vec::with_capacity(member_rows.len());
        for member in &member_rows {
            let Some((formation, owner)) = formations.get(&member.formation_id) else {
                return Err(Error::InternalError(format!(
                    "Line-up {} references formation {} which does not exist",
                    line_up_id, member.formation_id
                )));
            };

            let slots = expanded.remove(&member.formation_id).unwrap_or_default();

            formation_dtos.push(LineUpFormationDto {
                id: formation.id,
                name: formation.name.clone(),
                description: formation.description.clone(),
                army_type: formation.army_type,
                position: member.position,
                user: owner.as_ref().map(|user| FormationOwnerDto {
                    id: user.id,
                    display_name: user.display_name.clone(),
                }),
                slots: slots.slots,
                total_cost: slots.total_cost,
            });
        }

        Ok(LineUpDetailDto {
            id: line_up.id,
            name: line_up.name,
            created_at: line_up.created_at,
            updated_at: line_up.updated_at,
            formations: formation_dtos,
            general_conflicts,
            skill_conflicts,
            skill_resolutions,
        })
    }

    /// Lists the caller's line-ups, most recently updated first, with
    /// conflict counts recomputed per row
    pub async fn list(&self, user_id: i32) -> Result<LineUpListDto, Error> {
        let line_ups = LineUpRepository::new(self.db).list_for_user(user_id).await?;

        let mut lineups = Vec::with_capacity(line_ups.len());
        for line_up in line_ups {
            let members = self.current_members(line_up.id).await?;
            let resolutions = LineUpSkillResolutionRepository::new(self.db)
                .get_for_line_up(line_up.id)
                .await?;

            let general_conflicts = detect_general_conflicts(&members);
            let skill_conflicts = detect_skill_conflicts(&members, &resolutions);
            let unresolved_skill_conflict_count = skill_conflicts
                .iter()
                .filter(|conflict| !conflict.resolved)
                .count();

            lineups.push(LineUpOverviewDto {
                id: line_up.id,
                name: line_up.name,
                created_at: line_up.created_at,
                updated_at: line_up.updated_at,
                formation_count: members.len(),
                general_conflict_count: general_conflicts.len(),
                skill_conflict_count: skill_conflicts.len(),
                unresolved_skill_conflict_count,
            });
        }

        Ok(LineUpListDto { lineups })
    }

    /// Loads the requested formations as detector input, in input order
    async fn load_members(&self, formation_ids: &[i32]) -> Result<Vec<MemberFormation>, Error> {
        let found = FormationRepository::new(self.db).get_many(formation_ids).await?;

        // A duplicated ID also lands here: membership is keyed by formation,
        // so one formation cannot march twice.
        if found.len() != formation_ids.len() {
            return Err(LineUpError::FormationsNotFound.into());
        }

        let expanded = FormationService::new(self.db)
            .expand_slots(formation_ids)
            .await?;

        Ok(members_from(formation_ids, expanded))
    }

    async fn current_members(&self, line_up_id: i32) -> Result<Vec<MemberFormation>, Error> {
        let member_rows = LineUpRepository::new(self.db).get_members(line_up_id).await?;
        let formation_ids: Vec<i32> = member_rows
            .iter()
            .map(|member| member.formation_id)
            .collect();

        let expanded = FormationService::new(self.db)
            .expand_slots(&formation_ids)
            .await?;

        Ok(members_from(&formation_ids, expanded))
    }

    async fn require_owned(
        &self,
        line_up_id: i32,
        user_id: i32,
    ) -> Result<entity::line_up::Model, Error> {
        match LineUpRepository::new(self.db).get(line_up_id).await? {
            Some(line_up) if line_up.user_id == user_id => Ok(line_up),
            // Ownership misses read as missing so line-up existence stays private.
            _ => Err(LineUpError::NotFound.into()),
        }
    }
}

fn members_from(
    formation_ids: &[i32],
    mut expanded: HashMap<i32, ExpandedSlots>,
) -> Vec<MemberFormation> {
    formation_ids
        .iter()
        .map(|&formation_id| MemberFormation {
            formation_id,
            slots: expanded
                .remove(&formation_id)
                .map(|entry| entry.slots)
                .unwrap_or_default(),
        })
        .collect()
}
