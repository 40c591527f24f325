use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260610_000001_muster_user::MusterUser;

static IDX_FORMATION_USER_ID: &str = "idx-formation-user_id";
static FK_FORMATION_USER_ID: &str = "fk-formation-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Formation::Table)
                    .if_not_exists()
                    .col(pk_auto(Formation::Id))
                    .col(string(Formation::Name))
                    .col(text_null(Formation::Description))
                    .col(string_len(Formation::ArmyType, 16))
                    .col(boolean(Formation::IsPublic))
                    .col(boolean(Formation::IsCurated))
                    .col(integer_null(Formation::UserId))
                    .col(integer(Formation::RankScore))
                    .col(integer(Formation::VoteCount))
                    .col(timestamp(Formation::CreatedAt))
                    .col(timestamp(Formation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FORMATION_USER_ID)
                    .table(Formation::Table)
                    .col(Formation::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FORMATION_USER_ID)
                    .from_tbl(Formation::Table)
                    .from_col(Formation::UserId)
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
                    .name(FK_FORMATION_USER_ID)
                    .table(Formation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FORMATION_USER_ID)
                    .table(Formation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Formation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Formation {
    Table,
    Id,
    Name,
    Description,
    ArmyType,
    IsPublic,
    IsCurated,
    UserId,
    RankScore,
    VoteCount,
    CreatedAt,
    UpdatedAt,
}
