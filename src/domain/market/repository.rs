//! Market repository interface

use async_trait::async_trait;

use super::model::{Market, MarketChanges, NewMarket};
use crate::domain::{DeletePolicy, DomainResult};

#[async_trait]
pub trait MarketRepository: Send + Sync {
    /// All markets ordered by id
    async fn list(&self) -> DomainResult<Vec<Market>>;

    /// Market by id, `NotFound` when absent
    async fn get(&self, id: i32) -> DomainResult<Market>;

    /// Markets whose id is in `ids`; unknown ids are skipped
    async fn find_many(&self, ids: &[i32]) -> DomainResult<Vec<Market>>;

    async fn create(&self, market: NewMarket) -> DomainResult<Market>;

    /// Merge `changes` onto the stored market
    async fn update(&self, id: i32, changes: MarketChanges) -> DomainResult<Market>;

    /// Remove the market and its seller associations, returning the removed
    /// snapshot. Dependent products are handled according to `policy`.
    async fn delete(&self, id: i32, policy: DeletePolicy) -> DomainResult<Market>;
}
