//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `ReferenceValidator`: read-only existence checks against persisted state

use async_trait::async_trait;

use super::market::MarketRepository;
use super::product::ProductRepository;
use super::seller::SellerRepository;
use super::DomainResult;

// ── ReferenceValidator ──────────────────────────────────────────

/// Existence checks used before wiring relations.
///
/// These are queries only. Repositories repeat the same checks inside
/// their write transaction, so a concurrent delete cannot slip between the
/// check and the write.
#[async_trait]
pub trait ReferenceValidator: Send + Sync {
    async fn validate_market_exists(&self, id: i32) -> DomainResult<bool>;

    async fn validate_seller_exists(&self, id: i32) -> DomainResult<bool>;

    /// `true` only when every requested id resolves to a market; the number
    /// of matches must equal `ids.len()`, so duplicated ids fail as well
    async fn validate_markets_exist(&self, ids: &[i32]) -> DomainResult<bool>;
}

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let market = repos.markets().get(1).await?;
///     let sellers = repos.sellers().list_for_market(market.id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn markets(&self) -> &dyn MarketRepository;
    fn sellers(&self) -> &dyn SellerRepository;
    fn products(&self) -> &dyn ProductRepository;
    fn references(&self) -> &dyn ReferenceValidator;
}
