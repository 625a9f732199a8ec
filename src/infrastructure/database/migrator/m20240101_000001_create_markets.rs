//! Create markets table
//!
//! Net worth is kept as decimal text; SQLite has no exact decimal type.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Markets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Markets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Markets::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Markets::Location).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Markets::Description)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Markets::NetWorth).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Markets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Markets {
    Table,
    Id,
    Name,
    Location,
    Description,
    NetWorth,
}
