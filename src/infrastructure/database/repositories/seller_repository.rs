//! SeaORM implementation of SellerRepository
//!
//! Market associations live in `seller_markets`. Every write that touches
//! them checks the referenced markets inside the same transaction.

use std::collections::BTreeMap;

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    NotSet, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
    TransactionTrait,
};

use super::db_err;
use super::references::markets_exist;
use crate::domain::validation::MARKETS_NOT_FOUND;
use crate::domain::{
    DeletePolicy, DomainError, DomainResult, NewSeller, Seller, SellerChanges, SellerRepository,
    Violations,
};
use crate::infrastructure::database::entities::{product, seller, seller_market};

pub struct SeaOrmSellerRepository {
    db: DatabaseConnection,
}

impl SeaOrmSellerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: seller::Model, market_ids: Vec<i32>) -> Seller {
    Seller {
        id: m.id,
        name: m.name,
        contact_info: m.contact_info,
        market_ids,
    }
}

/// Market ids per seller, ascending, for the given sellers.
async fn market_ids_by_seller<C: ConnectionTrait>(
    conn: &C,
    seller_ids: &[i32],
) -> Result<BTreeMap<i32, Vec<i32>>, DbErr> {
    let mut by_seller: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    if seller_ids.is_empty() {
        return Ok(by_seller);
    }

    let links = seller_market::Entity::find()
        .filter(seller_market::Column::SellerId.is_in(seller_ids.iter().copied()))
        .order_by_asc(seller_market::Column::SellerId)
        .order_by_asc(seller_market::Column::MarketId)
        .all(conn)
        .await?;

    for link in links {
        by_seller.entry(link.seller_id).or_default().push(link.market_id);
    }
    Ok(by_seller)
}

async fn attach_markets<C: ConnectionTrait>(
    conn: &C,
    models: Vec<seller::Model>,
) -> Result<Vec<Seller>, DbErr> {
    let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
    let mut by_seller = market_ids_by_seller(conn, &ids).await?;
    Ok(models
        .into_iter()
        .map(|m| {
            let market_ids = by_seller.remove(&m.id).unwrap_or_default();
            model_to_domain(m, market_ids)
        })
        .collect())
}

/// Replace the association rows of one seller with `market_ids`.
async fn link_markets<C: ConnectionTrait>(
    conn: &C,
    seller_id: i32,
    market_ids: &[i32],
) -> Result<(), DbErr> {
    seller_market::Entity::delete_many()
        .filter(seller_market::Column::SellerId.eq(seller_id))
        .exec(conn)
        .await?;

    if market_ids.is_empty() {
        return Ok(());
    }

    let rows = market_ids.iter().map(|market_id| seller_market::ActiveModel {
        seller_id: Set(seller_id),
        market_id: Set(*market_id),
    });
    seller_market::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

fn unknown_markets() -> DomainError {
    DomainError::Validation(Violations::single("markets", MARKETS_NOT_FOUND))
}

// ── SellerRepository impl ───────────────────────────────────────

#[async_trait]
impl SellerRepository for SeaOrmSellerRepository {
    async fn list(&self) -> DomainResult<Vec<Seller>> {
        let models = seller::Entity::find()
            .order_by_asc(seller::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        attach_markets(&self.db, models).await.map_err(db_err)
    }

    async fn get(&self, id: i32) -> DomainResult<Seller> {
        let model = seller::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Seller", id))?;

        let mut by_seller = market_ids_by_seller(&self.db, &[id]).await.map_err(db_err)?;
        Ok(model_to_domain(model, by_seller.remove(&id).unwrap_or_default()))
    }

    async fn find_many(&self, ids: &[i32]) -> DomainResult<Vec<Seller>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = seller::Entity::find()
            .filter(seller::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(seller::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        attach_markets(&self.db, models).await.map_err(db_err)
    }

    async fn list_for_market(&self, market_id: i32) -> DomainResult<Vec<Seller>> {
        let models = seller::Entity::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                seller::Relation::SellerMarket.def(),
            )
            .filter(seller_market::Column::MarketId.eq(market_id))
            .order_by_asc(seller::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        attach_markets(&self.db, models).await.map_err(db_err)
    }

    async fn create(&self, s: NewSeller) -> DomainResult<Seller> {
        debug!("Saving seller: {} (markets {:?})", s.name, s.market_ids);

        let txn = self.db.begin().await.map_err(db_err)?;

        if !markets_exist(&txn, &s.market_ids).await.map_err(db_err)? {
            return Err(unknown_markets());
        }

        let model = seller::ActiveModel {
            id: NotSet,
            name: Set(s.name),
            contact_info: Set(s.contact_info),
        };
        let result = model.insert(&txn).await.map_err(db_err)?;
        link_markets(&txn, result.id, &s.market_ids)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        let mut market_ids = s.market_ids;
        market_ids.sort_unstable();
        info!("Seller saved: {} ({})", result.name, result.id);
        Ok(model_to_domain(result, market_ids))
    }

    async fn update(&self, id: i32, changes: SellerChanges) -> DomainResult<Seller> {
        debug!("Updating seller: {}", id);

        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = seller::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Seller", id))?;

        if let Some(market_ids) = &changes.market_ids {
            if !markets_exist(&txn, market_ids).await.map_err(db_err)? {
                return Err(unknown_markets());
            }
        }

        let mut by_seller = market_ids_by_seller(&txn, &[id]).await.map_err(db_err)?;
        let replaces_markets = changes.market_ids.is_some();
        let current_markets = by_seller.remove(&id).unwrap_or_default();
        let mut merged = model_to_domain(existing.clone(), current_markets);
        merged.apply(changes);

        let mut active: seller::ActiveModel = existing.into();
        active.name = Set(merged.name.clone());
        active.contact_info = Set(merged.contact_info.clone());
        active.update(&txn).await.map_err(db_err)?;

        if replaces_markets {
            link_markets(&txn, id, &merged.market_ids)
                .await
                .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)?;
        Ok(merged)
    }

    async fn delete(&self, id: i32, policy: DeletePolicy) -> DomainResult<Seller> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = seller::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Seller", id))?;

        let dependents = product::Entity::find()
            .filter(product::Column::SellerId.eq(id))
            .count(&txn)
            .await
            .map_err(db_err)?;

        if dependents > 0 {
            match policy {
                DeletePolicy::Restrict => {
                    return Err(DomainError::ReferentialIntegrity {
                        entity: "Seller",
                        id,
                        dependents,
                    });
                }
                DeletePolicy::Cascade => {
                    product::Entity::delete_many()
                        .filter(product::Column::SellerId.eq(id))
                        .exec(&txn)
                        .await
                        .map_err(db_err)?;
                    info!("Cascade-deleted {} product(s) of seller {}", dependents, id);
                }
            }
        }

        let mut by_seller = market_ids_by_seller(&txn, &[id]).await.map_err(db_err)?;
        let snapshot = model_to_domain(existing, by_seller.remove(&id).unwrap_or_default());

        link_markets(&txn, id, &[]).await.map_err(db_err)?;
        seller::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        info!("Seller {} deleted", id);
        Ok(snapshot)
    }
}
