//! Product DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Amount, Product, ProductChanges, ProductDetails};
use crate::interfaces::http::modules::markets::MarketResponse;
use crate::interfaces::http::modules::sellers::SellerResponse;

/// Product with foreign keys as plain ids
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "4.99")]
    pub price: Decimal,
    pub market_id: i32,
    pub seller_id: i32,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            market_id: p.market_id,
            seller_id: p.seller_id,
        }
    }
}

/// Product with its market and seller embedded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "4.99")]
    pub price: Decimal,
    pub market: MarketResponse,
    pub seller: SellerResponse,
}

impl From<ProductDetails> for ProductDetailResponse {
    fn from(d: ProductDetails) -> Self {
        Self {
            id: d.product.id,
            name: d.product.name,
            description: d.product.description,
            price: d.product.price,
            market: d.market.into(),
            seller: d.seller.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[schema(example = "Sourdough")]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, example = "4.99")]
    pub price: Option<Amount>,
    pub market_id: Option<i32>,
    pub seller_id: Option<i32>,
}

impl From<ProductRequest> for ProductChanges {
    fn from(r: ProductRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            price: r.price,
            market_id: r.market_id,
            seller_id: r.seller_id,
        }
    }
}
