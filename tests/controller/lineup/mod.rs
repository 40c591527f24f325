//! Tests for line-up controller endpoints.
//!
//! This module contains integration tests for the line-up planning HTTP
//! endpoints, covering membership writes, conflict status codes, and
//! resolution bookkeeping.

mod create_line_up;
mod delete_line_up;
mod get_line_up;
mod list_line_ups;
mod unresolve_skill_conflict;
mod update_line_up;

use muster::model::lineup::CreateLineUpDto;

use super::*;

fn create_dto(name: &str, formation_ids: Vec<i32>) -> CreateLineUpDto {
    CreateLineUpDto {
        name: name.to_string(),
        formation_ids,
    }
}
