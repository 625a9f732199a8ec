//! Seller use cases
//!
//! Every read returns [`SellerDetails`], i.e. the seller with its markets
//! resolved.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::domain::validation::MARKETS_NOT_FOUND;
use crate::domain::{
    DeletePolicy, DomainError, DomainResult, Market, NewSeller, RepositoryProvider, Seller,
    SellerChanges, SellerDetails, Violations,
};

/// Service for seller operations
pub struct SellerService {
    repos: Arc<dyn RepositoryProvider>,
    delete_policy: DeletePolicy,
}

impl SellerService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, delete_policy: DeletePolicy) -> Self {
        Self {
            repos,
            delete_policy,
        }
    }

    pub async fn list(&self) -> DomainResult<Vec<SellerDetails>> {
        let sellers = self.repos.sellers().list().await?;
        self.with_markets(sellers).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<SellerDetails> {
        let seller = self.repos.sellers().get(id).await?;
        self.details(seller).await
    }

    /// Sellers associated with a market; `NotFound` when the market is unknown.
    pub async fn list_for_market(&self, market_id: i32) -> DomainResult<Vec<SellerDetails>> {
        self.ensure_market(market_id).await?;
        let sellers = self.repos.sellers().list_for_market(market_id).await?;
        self.with_markets(sellers).await
    }

    /// Create a seller. Field problems and unknown market ids are reported
    /// together as one validation error.
    pub async fn create(&self, fields: SellerChanges) -> DomainResult<SellerDetails> {
        let mut violations = self.market_violations(fields.market_ids.as_deref()).await?;
        let seller = match NewSeller::try_from(fields) {
            Ok(seller) if violations.is_empty() => seller,
            Ok(_) => return Err(violations.into()),
            Err(field_violations) => {
                violations.merge(field_violations);
                return Err(violations.into());
            }
        };
        let created = self.repos.sellers().create(seller).await?;
        info!(
            seller_id = created.id,
            markets = ?created.market_ids,
            "Seller created: {}",
            created.name
        );
        self.details(created).await
    }

    /// Create a seller under `market_id`. The market is always part of the
    /// new seller's market set, next to any ids given in the body.
    pub async fn create_for_market(
        &self,
        market_id: i32,
        mut fields: SellerChanges,
    ) -> DomainResult<SellerDetails> {
        self.ensure_market(market_id).await?;
        let mut market_ids = fields.market_ids.take().unwrap_or_default();
        if !market_ids.contains(&market_id) {
            market_ids.push(market_id);
        }
        fields.market_ids = Some(market_ids);
        self.create(fields).await
    }

    pub async fn update(&self, id: i32, changes: SellerChanges) -> DomainResult<SellerDetails> {
        let mut violations = changes.violations();
        violations.merge(self.market_violations(changes.market_ids.as_deref()).await?);
        violations.into_result()?;
        let updated = self.repos.sellers().update(id, changes).await?;
        info!(seller_id = id, "Seller updated");
        self.details(updated).await
    }

    /// Delete a seller and return what it looked like, markets included.
    pub async fn delete(&self, id: i32) -> DomainResult<SellerDetails> {
        let deleted = self.repos.sellers().delete(id, self.delete_policy).await?;
        info!(seller_id = id, policy = %self.delete_policy, "Seller deleted");
        self.details(deleted).await
    }

    async fn ensure_market(&self, market_id: i32) -> DomainResult<()> {
        if self
            .repos
            .references()
            .validate_market_exists(market_id)
            .await?
        {
            Ok(())
        } else {
            Err(DomainError::not_found("Market", market_id))
        }
    }

    /// The whole market list fails when any id is unknown. The repository
    /// repeats this check inside its write transaction.
    async fn market_violations(&self, market_ids: Option<&[i32]>) -> DomainResult<Violations> {
        let mut violations = Violations::new();
        if let Some(ids) = market_ids {
            if !self.repos.references().validate_markets_exist(ids).await? {
                violations.add("markets", MARKETS_NOT_FOUND);
            }
        }
        Ok(violations)
    }

    async fn details(&self, seller: Seller) -> DomainResult<SellerDetails> {
        let markets = self.repos.markets().find_many(&seller.market_ids).await?;
        Ok(SellerDetails { seller, markets })
    }

    /// Resolve markets for many sellers with a single lookup.
    async fn with_markets(&self, sellers: Vec<Seller>) -> DomainResult<Vec<SellerDetails>> {
        let mut ids: Vec<i32> = sellers
            .iter()
            .flat_map(|s| s.market_ids.iter().copied())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let by_id: HashMap<i32, Market> = self
            .repos
            .markets()
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        Ok(sellers
            .into_iter()
            .map(|seller| {
                let markets = seller
                    .market_ids
                    .iter()
                    .filter_map(|id| by_id.get(id).cloned())
                    .collect();
                SellerDetails { seller, markets }
            })
            .collect())
    }
}
