use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MusterUser::Table)
                    .if_not_exists()
                    .col(pk_auto(MusterUser::Id))
                    .col(string(MusterUser::DisplayName))
                    .col(boolean(MusterUser::IsAdmin))
                    .col(timestamp(MusterUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MusterUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MusterUser {
    Table,
    Id,
    DisplayName,
    IsAdmin,
    CreatedAt,
}
