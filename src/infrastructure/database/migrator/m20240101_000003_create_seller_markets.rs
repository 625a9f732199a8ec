//! Create seller_markets join table
//!
//! Many-to-many association between sellers and markets. Rows go away with
//! either side.

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
                    .table(SellerMarkets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SellerMarkets::SellerId).integer().not_null())
                    .col(ColumnDef::new(SellerMarkets::MarketId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_seller_markets")
                            .col(SellerMarkets::SellerId)
                            .col(SellerMarkets::MarketId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seller_markets_seller")
                            .from(SellerMarkets::Table, SellerMarkets::SellerId)
                            .to(Sellers::Table, Sellers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seller_markets_market")
                            .from(SellerMarkets::Table, SellerMarkets::MarketId)
                            .to(Markets::Table, Markets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seller_markets_market")
                    .table(SellerMarkets::Table)
                    .col(SellerMarkets::MarketId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SellerMarkets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SellerMarkets {
    Table,
    SellerId,
    MarketId,
}
