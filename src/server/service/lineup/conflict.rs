//! Conflict detection across a line-up's member formations.
//!
//! Pure functions over already-expanded membership snapshots; nothing here
//! touches the database, so read paths can recompute conflicts on every
//! call without staleness concerns.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::model::{
    formation::FormationSlotDto,
    lineup::{GeneralConflictDto, SkillConflictDto},
};

/// A member formation reduced to what conflict detection needs
#[derive(Clone, Debug)]
pub struct MemberFormation {
    pub formation_id: i32,
    pub slots: Vec<FormationSlotDto>,
}

struct Usage {
    name: String,
    formation_ids: Vec<i32>,
}

/// Finds generals marching in more than one distinct member formation.
///
/// Conflicts come back in first-encounter order over the input, and a
/// formation ID is never counted twice for the same general.
pub fn detect_general_conflicts(formations: &[MemberFormation]) -> Vec<GeneralConflictDto> {
    let mut usage: IndexMap<i32, Usage> = IndexMap::new();

    for formation in formations {
        for slot in &formation.slots {
            let entry = usage.entry(slot.general.id).or_insert_with(|| Usage {
                name: slot.general.name.clone(),
                formation_ids: Vec::new(),
            });
            if !entry.formation_ids.contains(&formation.formation_id) {
                entry.formation_ids.push(formation.formation_id);
            }
        }
    }

    usage
        .into_iter()
        .filter(|(_, usage)| usage.formation_ids.len() > 1)
        .map(|(general_id, usage)| GeneralConflictDto {
            general_id,
            general_name: usage.name,
            formation_ids: usage.formation_ids,
        })
        .collect()
}

/// Finds skills equipped in more than one distinct member formation.
///
/// Both skill slots count the same, and a skill equipped twice within one
/// formation still counts that formation once. `resolved` reflects the
/// resolution rows passed in.
pub fn detect_skill_conflicts(
    formations: &[MemberFormation],
    resolutions: &[entity::line_up_skill_resolution::Model],
) -> Vec<SkillConflictDto> {
    let resolved: HashSet<i32> = resolutions
        .iter()
        .filter(|resolution| resolution.resolved)
        .map(|resolution| resolution.skill_id)
        .collect();

    let mut usage: IndexMap<i32, Usage> = IndexMap::new();

    for formation in formations {
        for slot in &formation.slots {
            for skill in [&slot.skill1, &slot.skill2].into_iter().flatten() {
                let entry = usage.entry(skill.id).or_insert_with(|| Usage {
                    name: skill.name.clone(),
                    formation_ids: Vec::new(),
                });
                if !entry.formation_ids.contains(&formation.formation_id) {
                    entry.formation_ids.push(formation.formation_id);
                }
            }
        }
    }

    usage
        .into_iter()
        .filter(|(_, usage)| usage.formation_ids.len() > 1)
        .map(|(skill_id, usage)| SkillConflictDto {
            skill_id,
            skill_name: usage.name,
            formation_ids: usage.formation_ids,
            resolved: resolved.contains(&skill_id),
        })
        .collect()
}
