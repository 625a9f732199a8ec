//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set,
    TransactionTrait,
};

use super::references::{market_exists, seller_exists};
use super::{db_err, money_from_db, money_to_db};
use crate::domain::validation::{MARKET_NOT_FOUND, SELLER_NOT_FOUND};
use crate::domain::{
    DomainError, DomainResult, NewProduct, Product, ProductChanges, ProductRepository, Violations,
};
use crate::infrastructure::database::entities::product;

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: product::Model) -> DomainResult<Product> {
    Ok(Product {
        price: money_from_db(&m.price)?,
        id: m.id,
        name: m.name,
        description: m.description,
        market_id: m.market_id,
        seller_id: m.seller_id,
    })
}

/// Check the referenced market and seller, reporting both when both are missing.
async fn check_references<C: ConnectionTrait>(
    conn: &C,
    market_id: Option<i32>,
    seller_id: Option<i32>,
) -> DomainResult<()> {
    let mut violations = Violations::new();
    if let Some(id) = market_id {
        if !market_exists(conn, id).await.map_err(db_err)? {
            violations.add("market_id", MARKET_NOT_FOUND);
        }
    }
    if let Some(id) = seller_id {
        if !seller_exists(conn, id).await.map_err(db_err)? {
            violations.add("seller_id", SELLER_NOT_FOUND);
        }
    }
    violations.into_result()
}

// ── ProductRepository impl ──────────────────────────────────────

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn list(&self) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn get(&self, id: i32) -> DomainResult<Product> {
        product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Product", id))
            .and_then(model_to_domain)
    }

    async fn create(&self, p: NewProduct) -> DomainResult<Product> {
        debug!(
            "Saving product: {} (market {}, seller {})",
            p.name, p.market_id, p.seller_id
        );

        let txn = self.db.begin().await.map_err(db_err)?;

        check_references(&txn, Some(p.market_id), Some(p.seller_id)).await?;

        let model = product::ActiveModel {
            id: NotSet,
            name: Set(p.name),
            description: Set(p.description),
            price: Set(money_to_db(p.price)),
            market_id: Set(p.market_id),
            seller_id: Set(p.seller_id),
        };
        let result = model.insert(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        info!("Product saved: {} ({})", result.name, result.id);
        model_to_domain(result)
    }

    async fn update(&self, id: i32, changes: ProductChanges) -> DomainResult<Product> {
        debug!("Updating product: {}", id);

        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = product::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Product", id))?;

        check_references(&txn, changes.market_id, changes.seller_id).await?;

        let mut merged = model_to_domain(existing.clone())?;
        merged.apply(changes);

        let mut active: product::ActiveModel = existing.into();
        active.name = Set(merged.name);
        active.description = Set(merged.description);
        active.price = Set(money_to_db(merged.price));
        active.market_id = Set(merged.market_id);
        active.seller_id = Set(merged.seller_id);
        let updated = active.update(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        model_to_domain(updated)
    }

    async fn delete(&self, id: i32) -> DomainResult<Product> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = product::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Product", id))?;
        let snapshot = model_to_domain(existing)?;

        product::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        info!("Product {} deleted", id);
        Ok(snapshot)
    }
}
