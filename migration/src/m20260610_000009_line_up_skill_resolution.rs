use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260610_000003_skill::Skill, m20260610_000007_line_up::LineUp};

static IDX_LINE_UP_SKILL_RESOLUTION_LINE_UP_ID_SKILL_ID: &str =
    "idx-line_up_skill_resolution-line_up_id-skill_id";
static FK_LINE_UP_SKILL_RESOLUTION_LINE_UP_ID: &str = "fk-line_up_skill_resolution-line_up_id";
static FK_LINE_UP_SKILL_RESOLUTION_SKILL_ID: &str = "fk-line_up_skill_resolution-skill_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LineUpSkillResolution::Table)
                    .if_not_exists()
                    .col(pk_auto(LineUpSkillResolution::Id))
                    .col(integer(LineUpSkillResolution::LineUpId))
                    .col(integer(LineUpSkillResolution::SkillId))
                    .col(boolean(LineUpSkillResolution::Resolved))
                    .col(string_null(LineUpSkillResolution::Note))
                    .col(timestamp(LineUpSkillResolution::CreatedAt))
                    .col(timestamp(LineUpSkillResolution::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LINE_UP_SKILL_RESOLUTION_LINE_UP_ID_SKILL_ID)
                    .table(LineUpSkillResolution::Table)
                    .col(LineUpSkillResolution::LineUpId)
                    .col(LineUpSkillResolution::SkillId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LINE_UP_SKILL_RESOLUTION_LINE_UP_ID)
                    .from_tbl(LineUpSkillResolution::Table)
                    .from_col(LineUpSkillResolution::LineUpId)
                    .to_tbl(LineUp::Table)
                    .to_col(LineUp::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LINE_UP_SKILL_RESOLUTION_SKILL_ID)
                    .from_tbl(LineUpSkillResolution::Table)
                    .from_col(LineUpSkillResolution::SkillId)
                    .to_tbl(Skill::Table)
                    .to_col(Skill::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LINE_UP_SKILL_RESOLUTION_SKILL_ID)
                    .table(LineUpSkillResolution::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LINE_UP_SKILL_RESOLUTION_LINE_UP_ID)
                    .table(LineUpSkillResolution::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LINE_UP_SKILL_RESOLUTION_LINE_UP_ID_SKILL_ID)
                    .table(LineUpSkillResolution::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(LineUpSkillResolution::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LineUpSkillResolution {
    Table,
    Id,
    LineUpId,
    SkillId,
    Resolved,
    Note,
    CreatedAt,
    UpdatedAt,
}
