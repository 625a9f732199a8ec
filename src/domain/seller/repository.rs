//! Seller repository interface

use async_trait::async_trait;

use super::model::{NewSeller, Seller, SellerChanges};
use crate::domain::{DeletePolicy, DomainResult};

#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// All sellers with their market sets, ordered by id
    async fn list(&self) -> DomainResult<Vec<Seller>>;

    /// Seller by id, `NotFound` when absent
    async fn get(&self, id: i32) -> DomainResult<Seller>;

    /// Sellers whose id is in `ids`; unknown ids are skipped
    async fn find_many(&self, ids: &[i32]) -> DomainResult<Vec<Seller>>;

    /// Sellers associated with the given market
    async fn list_for_market(&self, market_id: i32) -> DomainResult<Vec<Seller>>;

    /// Store the seller and its market associations in one transaction.
    /// Fails without writing anything when any market id is unknown.
    async fn create(&self, seller: NewSeller) -> DomainResult<Seller>;

    /// Merge `changes`; a supplied market set replaces the stored one
    async fn update(&self, id: i32, changes: SellerChanges) -> DomainResult<Seller>;

    /// Remove the seller and its market associations, returning the removed
    /// snapshot. Dependent products are handled according to `policy`.
    async fn delete(&self, id: i32, policy: DeletePolicy) -> DomainResult<Seller>;
}
