//! SeaORM implementation of MarketRepository

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::{db_err, money_from_db, money_to_db};
use crate::domain::{
    DeletePolicy, DomainError, DomainResult, Market, MarketChanges, MarketRepository, NewMarket,
};
use crate::infrastructure::database::entities::{market, product, seller_market};

pub struct SeaOrmMarketRepository {
    db: DatabaseConnection,
}

impl SeaOrmMarketRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: market::Model) -> DomainResult<Market> {
    Ok(Market {
        net_worth: money_from_db(&m.net_worth)?,
        id: m.id,
        name: m.name,
        location: m.location,
        description: m.description,
    })
}

// ── MarketRepository impl ───────────────────────────────────────

#[async_trait]
impl MarketRepository for SeaOrmMarketRepository {
    async fn list(&self) -> DomainResult<Vec<Market>> {
        let models = market::Entity::find()
            .order_by_asc(market::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn get(&self, id: i32) -> DomainResult<Market> {
        market::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Market", id))
            .and_then(model_to_domain)
    }

    async fn find_many(&self, ids: &[i32]) -> DomainResult<Vec<Market>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = market::Entity::find()
            .filter(market::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(market::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn create(&self, m: NewMarket) -> DomainResult<Market> {
        debug!("Saving market: {}", m.name);

        let model = market::ActiveModel {
            id: NotSet,
            name: Set(m.name),
            location: Set(m.location),
            description: Set(m.description),
            net_worth: Set(money_to_db(m.net_worth)),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Market saved: {} ({})", result.name, result.id);
        model_to_domain(result)
    }

    async fn update(&self, id: i32, changes: MarketChanges) -> DomainResult<Market> {
        debug!("Updating market: {}", id);

        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = market::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Market", id))?;

        let mut merged = model_to_domain(existing.clone())?;
        merged.apply(changes);

        let mut active: market::ActiveModel = existing.into();
        active.name = Set(merged.name);
        active.location = Set(merged.location);
        active.description = Set(merged.description);
        active.net_worth = Set(money_to_db(merged.net_worth));
        let updated = active.update(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        model_to_domain(updated)
    }

    async fn delete(&self, id: i32, policy: DeletePolicy) -> DomainResult<Market> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = market::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Market", id))?;
        let snapshot = model_to_domain(existing)?;

        let dependents = product::Entity::find()
            .filter(product::Column::MarketId.eq(id))
            .count(&txn)
            .await
            .map_err(db_err)?;

        if dependents > 0 {
            match policy {
                DeletePolicy::Restrict => {
                    return Err(DomainError::ReferentialIntegrity {
                        entity: "Market",
                        id,
                        dependents,
                    });
                }
                DeletePolicy::Cascade => {
                    product::Entity::delete_many()
                        .filter(product::Column::MarketId.eq(id))
                        .exec(&txn)
                        .await
                        .map_err(db_err)?;
                    info!("Cascade-deleted {} product(s) of market {}", dependents, id);
                }
            }
        }

        let detached = seller_market::Entity::delete_many()
            .filter(seller_market::Column::MarketId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        market::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        info!(
            "Market {} deleted (detached from {} seller(s))",
            id, detached.rows_affected
        );
        Ok(snapshot)
    }
}
