use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260610_000001_muster_user::MusterUser;

static IDX_LINE_UP_USER_ID: &str = "idx-line_up-user_id";
static FK_LINE_UP_USER_ID: &str = "fk-line_up-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LineUp::Table)
                    .if_not_exists()
                    .col(pk_auto(LineUp::Id))
                    .col(string(LineUp::Name))
                    .col(integer(LineUp::UserId))
                    .col(timestamp(LineUp::CreatedAt))
                    .col(timestamp(LineUp::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LINE_UP_USER_ID)
                    .table(LineUp::Table)
                    .col(LineUp::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LINE_UP_USER_ID)
                    .from_tbl(LineUp::Table)
                    .from_col(LineUp::UserId)
                    .to_tbl(MusterUser::Table)
                    .to_col(MusterUser::Id)
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
                    .name(FK_LINE_UP_USER_ID)
                    .table(LineUp::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LINE_UP_USER_ID)
                    .table(LineUp::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LineUp::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LineUp {
    Table,
    Id,
    Name,
    UserId,
    CreatedAt,
    UpdatedAt,
}
