use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260610_000002_general::General, m20260610_000003_skill::Skill,
    m20260610_000004_formation::Formation,
};

static IDX_FORMATION_SLOT_FORMATION_ID: &str = "idx-formation_slot-formation_id";
static IDX_FORMATION_SLOT_GENERAL_ID: &str = "idx-formation_slot-general_id";
static FK_FORMATION_SLOT_FORMATION_ID: &str = "fk-formation_slot-formation_id";
static FK_FORMATION_SLOT_GENERAL_ID: &str = "fk-formation_slot-general_id";
static FK_FORMATION_SLOT_SKILL1_ID: &str = "fk-formation_slot-skill1_id";
static FK_FORMATION_SLOT_SKILL2_ID: &str = "fk-formation_slot-skill2_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormationSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(FormationSlot::Id))
                    .col(integer(FormationSlot::FormationId))
                    .col(integer(FormationSlot::GeneralId))
                    .col(integer(FormationSlot::Position))
                    .col(integer_null(FormationSlot::Skill1Id))
                    .col(integer_null(FormationSlot::Skill2Id))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FORMATION_SLOT_FORMATION_ID)
                    .table(FormationSlot::Table)
                    .col(FormationSlot::FormationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FORMATION_SLOT_GENERAL_ID)
                    .table(FormationSlot::Table)
                    .col(FormationSlot::GeneralId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FORMATION_SLOT_FORMATION_ID)
                    .from_tbl(FormationSlot::Table)
                    .from_col(FormationSlot::FormationId)
                    .to_tbl(Formation::Table)
                    .to_col(Formation::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FORMATION_SLOT_GENERAL_ID)
                    .from_tbl(FormationSlot::Table)
                    .from_col(FormationSlot::GeneralId)
                    .to_tbl(General::Table)
                    .to_col(General::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FORMATION_SLOT_SKILL1_ID)
                    .from_tbl(FormationSlot::Table)
                    .from_col(FormationSlot::Skill1Id)
                    .to_tbl(Skill::Table)
                    .to_col(Skill::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FORMATION_SLOT_SKILL2_ID)
                    .from_tbl(FormationSlot::Table)
                    .from_col(FormationSlot::Skill2Id)
                    .to_tbl(Skill::Table)
                    .to_col(Skill::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FORMATION_SLOT_SKILL2_ID)
                    .table(FormationSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FORMATION_SLOT_SKILL1_ID)
                    .table(FormationSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FORMATION_SLOT_GENERAL_ID)
                    .table(FormationSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FORMATION_SLOT_FORMATION_ID)
                    .table(FormationSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FORMATION_SLOT_GENERAL_ID)
                    .table(FormationSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FORMATION_SLOT_FORMATION_ID)
                    .table(FormationSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FormationSlot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FormationSlot {
    Table,
    Id,
    FormationId,
    GeneralId,
    Position,
    Skill1Id,
    Skill2Id,
}
