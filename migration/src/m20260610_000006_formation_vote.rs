use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260610_000001_muster_user::MusterUser, m20260610_000004_formation::Formation};

static IDX_FORMATION_VOTE_FORMATION_ID_USER_ID: &str = "idx-formation_vote-formation_id-user_id";
static FK_FORMATION_VOTE_FORMATION_ID: &str = "fk-formation_vote-formation_id";
static FK_FORMATION_VOTE_USER_ID: &str = "fk-formation_vote-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormationVote::Table)
                    .if_not_exists()
                    .col(pk_auto(FormationVote::Id))
                    .col(integer(FormationVote::FormationId))
                    .col(integer(FormationVote::UserId))
                    .col(integer(FormationVote::Value))
                    .col(timestamp(FormationVote::CreatedAt))
                    .col(timestamp(FormationVote::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FORMATION_VOTE_FORMATION_ID_USER_ID)
                    .table(FormationVote::Table)
                    .col(FormationVote::FormationId)
                    .col(FormationVote::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FORMATION_VOTE_FORMATION_ID)
                    .from_tbl(FormationVote::Table)
                    .from_col(FormationVote::FormationId)
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
                    .name(FK_FORMATION_VOTE_USER_ID)
                    .from_tbl(FormationVote::Table)
                    .from_col(FormationVote::UserId)
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
                    .name(FK_FORMATION_VOTE_USER_ID)
                    .table(FormationVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FORMATION_VOTE_FORMATION_ID)
                    .table(FormationVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FORMATION_VOTE_FORMATION_ID_USER_ID)
                    .table(FormationVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FormationVote::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FormationVote {
    Table,
    Id,
    FormationId,
    UserId,
    Value,
    CreatedAt,
    UpdatedAt,
}
