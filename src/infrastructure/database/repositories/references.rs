//! Existence checks shared by the repositories and `ReferenceValidator`
//!
//! The helpers are generic over `ConnectionTrait` so a repository can run
//! them on its open transaction, keeping check and write atomic.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter,
};

use super::db_err;
use crate::domain::{DomainResult, ReferenceValidator};
use crate::infrastructure::database::entities::{market, seller};

pub(crate) async fn market_exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    let count = market::Entity::find_by_id(id).count(conn).await?;
    Ok(count > 0)
}

pub(crate) async fn seller_exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    let count = seller::Entity::find_by_id(id).count(conn).await?;
    Ok(count > 0)
}

/// Exact-count match: the number of markets found must equal `ids.len()`.
pub(crate) async fn markets_exist<C: ConnectionTrait>(
    conn: &C,
    ids: &[i32],
) -> Result<bool, DbErr> {
    if ids.is_empty() {
        return Ok(true);
    }
    let found = market::Entity::find()
        .filter(market::Column::Id.is_in(ids.iter().copied()))
        .count(conn)
        .await?;
    Ok(found == ids.len() as u64)
}

// ── SeaOrmReferenceValidator ────────────────────────────────────

pub struct SeaOrmReferenceValidator {
    db: DatabaseConnection,
}

impl SeaOrmReferenceValidator {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReferenceValidator for SeaOrmReferenceValidator {
    async fn validate_market_exists(&self, id: i32) -> DomainResult<bool> {
        market_exists(&self.db, id).await.map_err(db_err)
    }

    async fn validate_seller_exists(&self, id: i32) -> DomainResult<bool> {
        seller_exists(&self.db, id).await.map_err(db_err)
    }

    async fn validate_markets_exist(&self, ids: &[i32]) -> DomainResult<bool> {
        markets_exist(&self.db, ids).await.map_err(db_err)
    }
}
