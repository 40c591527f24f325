use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260610_000004_formation::Formation, m20260610_000007_line_up::LineUp};

static IDX_LINE_UP_FORMATION_LINE_UP_ID: &str = "idx-line_up_formation-line_up_id";
static IDX_LINE_UP_FORMATION_FORMATION_ID: &str = "idx-line_up_formation-formation_id";
static FK_LINE_UP_FORMATION_LINE_UP_ID: &str = "fk-line_up_formation-line_up_id";
static FK_LINE_UP_FORMATION_FORMATION_ID: &str = "fk-line_up_formation-formation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LineUpFormation::Table)
                    .if_not_exists()
                    .col(pk_auto(LineUpFormation::Id))
                    .col(integer(LineUpFormation::LineUpId))
                    .col(integer(LineUpFormation::FormationId))
                    .col(integer(LineUpFormation::Position))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LINE_UP_FORMATION_LINE_UP_ID)
                    .table(LineUpFormation::Table)
                    .col(LineUpFormation::LineUpId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LINE_UP_FORMATION_FORMATION_ID)
                    .table(LineUpFormation::Table)
                    .col(LineUpFormation::FormationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LINE_UP_FORMATION_LINE_UP_ID)
                    .from_tbl(LineUpFormation::Table)
                    .from_col(LineUpFormation::LineUpId)
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
                    .name(FK_LINE_UP_FORMATION_FORMATION_ID)
                    .from_tbl(LineUpFormation::Table)
                    .from_col(LineUpFormation::FormationId)
                    .to_tbl(Formation::Table)
                    .to_col(Formation::Id)
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
                    .name(FK_LINE_UP_FORMATION_FORMATION_ID)
                    .table(LineUpFormation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LINE_UP_FORMATION_LINE_UP_ID)
                    .table(LineUpFormation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LINE_UP_FORMATION_FORMATION_ID)
                    .table(LineUpFormation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LINE_UP_FORMATION_LINE_UP_ID)
                    .table(LineUpFormation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LineUpFormation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LineUpFormation {
    Table,
    Id,
    LineUpId,
    FormationId,
    Position,
}
