//! Market use cases

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    DeletePolicy, DomainResult, Market, MarketChanges, NewMarket, RepositoryProvider,
};

/// Service for market operations
pub struct MarketService {
    repos: Arc<dyn RepositoryProvider>,
    delete_policy: DeletePolicy,
}

impl MarketService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, delete_policy: DeletePolicy) -> Self {
        Self {
            repos,
            delete_policy,
        }
    }

    pub async fn list(&self) -> DomainResult<Vec<Market>> {
        self.repos.markets().list().await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Market> {
        self.repos.markets().get(id).await
    }

    /// Create a market from the submitted fields. Missing and invalid fields
    /// are reported together.
    pub async fn create(&self, fields: MarketChanges) -> DomainResult<Market> {
        let market = NewMarket::try_from(fields)?;
        let created = self.repos.markets().create(market).await?;
        info!(market_id = created.id, "Market created: {}", created.name);
        Ok(created)
    }

    pub async fn update(&self, id: i32, changes: MarketChanges) -> DomainResult<Market> {
        changes.violations().into_result()?;
        let updated = self.repos.markets().update(id, changes).await?;
        info!(market_id = id, "Market updated");
        Ok(updated)
    }

    /// Delete a market, detaching it from every seller first.
    pub async fn delete(&self, id: i32) -> DomainResult<Market> {
        let deleted = self.repos.markets().delete(id, self.delete_policy).await?;
        info!(market_id = id, policy = %self.delete_policy, "Market deleted");
        Ok(deleted)
    }
}
