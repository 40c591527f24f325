//! Tests for admin controller endpoints.
//!
//! This module contains integration tests for the admin formation management
//! HTTP endpoints, with particular attention to the admin gate: regular users
//! are rejected with 403 and anonymous callers with 401.

mod admin_create_formation;
mod admin_delete_formation;
mod admin_list_formations;

use entity::formation::ArmyType;
use muster::model::formation::{AdminCreateFormationDto, FormationSlotInputDto};

use super::*;

fn slot(general_id: i32, position: i32) -> FormationSlotInputDto {
    FormationSlotInputDto {
        general_id,
        position,
        skill1_id: None,
        skill2_id: None,
    }
}

fn admin_create_dto(name: &str, slots: Vec<FormationSlotInputDto>) -> AdminCreateFormationDto {
    AdminCreateFormationDto {
        name: name.to_string(),
        description: None,
        army_type: ArmyType::Cavalry,
        is_public: None,
        is_curated: None,
        user_id: None,
        slots,
    }
}
