use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(General::Table)
                    .if_not_exists()
                    .col(pk_auto(General::Id))
                    .col(string(General::Name))
                    .col(integer(General::Cost))
                    .col(timestamp(General::CreatedAt))
                    .col(timestamp(General::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(General::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum General {
    Table,
    Id,
    Name,
    Cost,
    CreatedAt,
    UpdatedAt,
}
