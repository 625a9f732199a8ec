//! Create products table
//!
//! Both foreign keys restrict deletes at the database level; cascading is
//! done explicitly by the repositories when configured.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_markets::Markets;
use super::m20240101_000002_create_sellers::Sellers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Products::Description).text().not_null())
                    .col(ColumnDef::new(Products::Price).text().not_null())
                    .col(ColumnDef::new(Products::MarketId).integer().not_null())
                    .col(ColumnDef::new(Products::SellerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_market")
                            .from(Products::Table, Products::MarketId)
                            .to(Markets::Table, Markets::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_seller")
                            .from(Products::Table, Products::SellerId)
                            .to(Sellers::Table, Sellers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_market")
                    .table(Products::Table)
                    .col(Products::MarketId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_seller")
                    .table(Products::Table)
                    .col(Products::SellerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Products {
    Table,
    Id,
    Name,
    Description,
    Price,
    MarketId,
    SellerId,
}
