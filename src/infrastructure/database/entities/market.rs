//! Market entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "markets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub location: String,
    pub description: String,

    /// Exact decimal text with two places, e.g. `"1000000.00"`
    #[sea_orm(column_type = "Text")]
    pub net_worth: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
    #[sea_orm(has_many = "super::seller_market::Entity")]
    SellerMarket,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::seller_market::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SellerMarket.def()
    }
}

impl Related<super::seller::Entity> for Entity {
    fn to() -> RelationDef {
        super::seller_market::Relation::Seller.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::seller_market::Relation::Market.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
