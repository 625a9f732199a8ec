//! Seller DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Seller, SellerChanges, SellerDetails};
use crate::interfaces::http::modules::markets::MarketResponse;

/// Seller with its markets embedded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SellerDetailResponse {
    pub id: i32,
    pub name: String,
    pub contact_info: String,
    pub markets: Vec<MarketResponse>,
}

impl From<SellerDetails> for SellerDetailResponse {
    fn from(d: SellerDetails) -> Self {
        Self {
            id: d.seller.id,
            name: d.seller.name,
            contact_info: d.seller.contact_info,
            markets: d.markets.into_iter().map(Into::into).collect(),
        }
    }
}

/// Seller summary with market ids, used inside product details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SellerResponse {
    pub id: i32,
    pub name: String,
    pub contact_info: String,
    pub markets: Vec<i32>,
}

impl From<Seller> for SellerResponse {
    fn from(s: Seller) -> Self {
        Self {
            id: s.id,
            name: s.name,
            contact_info: s.contact_info,
            markets: s.market_ids,
        }
    }
}

/// Body for creating or updating a seller.
///
/// `markets` lists market ids. On update a supplied list replaces the
/// current associations.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SellerRequest {
    #[schema(example = "Jane's Bakery")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub contact_info: Option<String>,
    #[schema(example = json!([1, 2]))]
    pub markets: Option<Vec<i32>>,
}

impl From<SellerRequest> for SellerChanges {
    fn from(r: SellerRequest) -> Self {
        Self {
            name: r.name,
            contact_info: r.contact_info,
            market_ids: r.markets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Market;
    use rust_decimal::Decimal;

    #[test]
    fn detail_embeds_markets() {
        let details = SellerDetails {
            seller: Seller {
                id: 7,
                name: "S".into(),
                contact_info: "c".into(),
                market_ids: vec![1],
            },
            markets: vec![Market {
                id: 1,
                name: "A".into(),
                location: "abc".into(),
                description: "d".into(),
                net_worth: Decimal::new(1000, 2),
            }],
        };
        let json = serde_json::to_value(SellerDetailResponse::from(details)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["markets"][0]["name"], "A");
        assert_eq!(json["markets"][0]["net_worth"], "10.00");
    }

    #[test]
    fn request_markets_map_to_market_ids() {
        let req: SellerRequest =
            serde_json::from_str(r#"{"name": "S", "markets": [3, 1]}"#).unwrap();
        let changes = SellerChanges::from(req);
        assert_eq!(changes.market_ids, Some(vec![3, 1]));
        assert!(changes.contact_info.is_none());
    }
}
