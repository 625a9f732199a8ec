//! Product repository interface

use async_trait::async_trait;

use super::model::{NewProduct, Product, ProductChanges};
use crate::domain::DomainResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Product>>;

    async fn get(&self, id: i32) -> DomainResult<Product>;

    /// Store the product after checking, in the same transaction, that its
    /// market and seller exist
    async fn create(&self, product: NewProduct) -> DomainResult<Product>;

    async fn update(&self, id: i32, changes: ProductChanges) -> DomainResult<Product>;

    async fn delete(&self, id: i32) -> DomainResult<Product>;
}
