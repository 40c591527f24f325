
use entity::formation::ArmyType;
use muster_test_utils::prelude::*;

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
