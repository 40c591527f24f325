//! Tests for formation controller endpoints.
//!
//! This module contains integration tests for the public formation HTTP
//! endpoints, covering catalog browsing, formation management by owners,
//! copying, and voting.

mod copy_formation;
mod create_formation;
mod delete_formation;
mod get_formation;
mod vote_formation;

use entity::formation::ArmyType;
use muster::model::formation::{CreateFormationDto, FormationSlotInputDto};

use super::*;

fn slot(general_id: i32, position: i32) -> FormationSlotInputDto {
    FormationSlotInputDto {
        general_id,
        position,
        skill1_id: None,
        skill2_id: None,
    }
}

fn create_dto(name: &str, slots: Vec<FormationSlotInputDto>) -> CreateFormationDto {
    CreateFormationDto {
        name: name.to_string(),
        description: None,
        army_type: ArmyType::Cavalry,
        is_public: None,
        slots,
    }
}
