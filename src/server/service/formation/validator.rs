//! Structural and cost checks for proposed formation slots.

use std::collections::{HashMap, HashSet};

use crate::{model::formation::FormationSlotInputDto, server::error::formation::FormationError};

/// Deployment point budget shared by every formation
pub const MAX_FORMATION_COST: i32 = 21;

/// Largest number of slots a formation can hold
pub const MAX_SLOTS: usize = 3;

/// Checks a proposed slot list rule by rule, stopping at the first
/// violation: slot count, position uniqueness and range, general
/// uniqueness, general existence, then the cost budget.
///
/// `cost_map` holds the deployment cost per general ID; a general missing
/// from it is treated as nonexistent.
///
/// # Returns
/// - `Ok(i32)`: The summed deployment cost of the slots
/// - `Err(FormationError)`: The first violated rule
pub fn validate_slots(
    slots: &[FormationSlotInputDto],
    cost_map: &HashMap<i32, i32>,
) -> Result<i32, FormationError> {
    if slots.is_empty() || slots.len() > MAX_SLOTS {
        return Err(FormationError::InvalidSlotCount(slots.len()));
    }

    let mut positions = HashSet::new();
    for slot in slots {
        if slot.position < 1 || slot.position > MAX_SLOTS as i32 || !positions.insert(slot.position)
        {
            return Err(FormationError::InvalidPositions);
        }
    }

    let mut generals = HashSet::new();
    for slot in slots {
        if !generals.insert(slot.general_id) {
            return Err(FormationError::DuplicateGeneral);
        }
    }

    let mut total = 0;
    for slot in slots {
        match cost_map.get(&slot.general_id) {
            Some(cost) => total += cost,
            None => return Err(FormationError::GeneralNotFound(slot.general_id)),
        }
    }

    if total > MAX_FORMATION_COST {
        return Err(FormationError::CostExceeded { total });
    }

    Ok(total)
}
