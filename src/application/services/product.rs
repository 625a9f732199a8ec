//! Product use cases

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::validation::{MARKET_NOT_FOUND, SELLER_NOT_FOUND};
use crate::domain::{
    DomainResult, Market, NewProduct, Product, ProductChanges, ProductDetails,
    RepositoryProvider, Seller, Violations,
};

/// Service for product operations
pub struct ProductService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ProductService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Every product with its market and seller. A product whose market or
    /// seller vanished between the lookups (a concurrent cascade delete) is
    /// left out.
    pub async fn list(&self) -> DomainResult<Vec<ProductDetails>> {
        let products = self.repos.products().list().await?;

        let market_ids = unique(products.iter().map(|p| p.market_id));
        let seller_ids = unique(products.iter().map(|p| p.seller_id));

        let markets: HashMap<i32, Market> = self
            .repos
            .markets()
            .find_many(&market_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();
        let sellers: HashMap<i32, Seller> = self
            .repos
            .sellers()
            .find_many(&seller_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        Ok(products
            .into_iter()
            .filter_map(|product| {
                let market = markets.get(&product.market_id).cloned();
                let seller = sellers.get(&product.seller_id).cloned();
                match (market, seller) {
                    (Some(market), Some(seller)) => Some(ProductDetails {
                        product,
                        market,
                        seller,
                    }),
                    _ => {
                        debug!(product_id = product.id, "Product references gone, skipped");
                        None
                    }
                }
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> DomainResult<ProductDetails> {
        let product = self.repos.products().get(id).await?;
        self.details(product).await
    }

    /// Create a product. Field problems and unknown market/seller ids are
    /// reported together as one validation error.
    pub async fn create(&self, fields: ProductChanges) -> DomainResult<Product> {
        let mut violations = self
            .reference_violations(fields.market_id, fields.seller_id)
            .await?;
        let product = match NewProduct::try_from(fields) {
            Ok(product) if violations.is_empty() => product,
            Ok(_) => return Err(violations.into()),
            Err(field_violations) => {
                violations.merge(field_violations);
                return Err(violations.into());
            }
        };
        let created = self.repos.products().create(product).await?;
        info!(
            product_id = created.id,
            market_id = created.market_id,
            seller_id = created.seller_id,
            "Product created: {}",
            created.name
        );
        Ok(created)
    }

    pub async fn update(&self, id: i32, changes: ProductChanges) -> DomainResult<Product> {
        let mut violations = changes.violations();
        violations.merge(
            self.reference_violations(changes.market_id, changes.seller_id)
                .await?,
        );
        violations.into_result()?;
        let updated = self.repos.products().update(id, changes).await?;
        info!(product_id = id, "Product updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<ProductDetails> {
        let deleted = self.repos.products().delete(id).await?;
        info!(product_id = id, "Product deleted");
        self.details(deleted).await
    }

    /// Unknown ids among the supplied references. The repository repeats
    /// this check inside its write transaction.
    async fn reference_violations(
        &self,
        market_id: Option<i32>,
        seller_id: Option<i32>,
    ) -> DomainResult<Violations> {
        let references = self.repos.references();
        let mut violations = Violations::new();
        if let Some(id) = market_id {
            if !references.validate_market_exists(id).await? {
                violations.add("market_id", MARKET_NOT_FOUND);
            }
        }
        if let Some(id) = seller_id {
            if !references.validate_seller_exists(id).await? {
                violations.add("seller_id", SELLER_NOT_FOUND);
            }
        }
        Ok(violations)
    }

    async fn details(&self, product: Product) -> DomainResult<ProductDetails> {
        let market = self.repos.markets().get(product.market_id).await?;
        let seller = self.repos.sellers().get(product.seller_id).await?;
        Ok(ProductDetails {
            product,
            market,
            seller,
        })
    }
}

fn unique(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
