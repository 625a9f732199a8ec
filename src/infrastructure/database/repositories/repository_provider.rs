//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    MarketRepository, ProductRepository, ReferenceValidator, RepositoryProvider, SellerRepository,
};

use super::market_repository::SeaOrmMarketRepository;
use super::product_repository::SeaOrmProductRepository;
use super::references::SeaOrmReferenceValidator;
use super::seller_repository::SeaOrmSellerRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let market = repos.markets().get(1).await?;
/// let sellers = repos.sellers().list_for_market(market.id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    markets: SeaOrmMarketRepository,
    sellers: SeaOrmSellerRepository,
    products: SeaOrmProductRepository,
    references: SeaOrmReferenceValidator,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            markets: SeaOrmMarketRepository::new(db.clone()),
            sellers: SeaOrmSellerRepository::new(db.clone()),
            products: SeaOrmProductRepository::new(db.clone()),
            references: SeaOrmReferenceValidator::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn markets(&self) -> &dyn MarketRepository {
        &self.markets
    }

    fn sellers(&self) -> &dyn SellerRepository {
        &self.sellers
    }

    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }

    fn references(&self) -> &dyn ReferenceValidator {
        &self.references
    }
}
