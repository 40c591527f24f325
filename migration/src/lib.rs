pub use sea_orm_migration::prelude::*;

mod m20260610_000001_muster_user;
mod m20260610_000002_general;
mod m20260610_000003_skill;
mod m20260610_000004_formation;
mod m20260610_000005_formation_slot;
mod m20260610_000006_formation_vote;
mod m20260610_000007_line_up;
mod m20260610_000008_line_up_formation;
mod m20260610_000009_line_up_skill_resolution;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260610_000001_muster_user::Migration),
            Box::new(m20260610_000002_general::Migration),
            Box::new(m20260610_000003_skill::Migration),
            Box::new(m20260610_000004_formation::Migration),
            Box::new(m20260610_000005_formation_slot::Migration),
            Box::new(m20260610_000006_formation_vote::Migration),
            Box::new(m20260610_000007_line_up::Migration),
            Box::new(m20260610_000008_line_up_formation::Migration),
            Box::new(m20260610_000009_line_up_skill_resolution::Migration),
        ]
    }
}
