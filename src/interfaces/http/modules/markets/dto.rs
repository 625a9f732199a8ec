//! Market DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Amount, Market, MarketChanges};

/// Market as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarketResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: String,
    #[schema(value_type = String, example = "1000000.00")]
    pub net_worth: Decimal,
}

impl From<Market> for MarketResponse {
    fn from(m: Market) -> Self {
        Self {
            id: m.id,
            name: m.name,
            location: m.location,
            description: m.description,
            net_worth: m.net_worth,
        }
    }
}

/// Body for creating (all fields required) or updating (any subset) a market
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MarketRequest {
    #[schema(example = "Farmers Market")]
    pub name: Option<String>,
    #[schema(example = "Main Street 1")]
    pub location: Option<String>,
    pub description: Option<String>,
    /// String or number; checked as a field, so bad digits are reported
    /// under `net_worth`
    #[schema(value_type = Option<String>, example = "1000000.00")]
    pub net_worth: Option<Amount>,
}

impl From<MarketRequest> for MarketChanges {
    fn from(r: MarketRequest) -> Self {
        Self {
            name: r.name,
            location: r.location,
            description: r.description,
            net_worth: r.net_worth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn net_worth_serializes_as_string() {
        let response = MarketResponse::from(Market {
            id: 1,
            name: "A".into(),
            location: "abc".into(),
            description: "d".into(),
            net_worth: Decimal::from_str("10.00").unwrap(),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["net_worth"], "10.00");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn request_accepts_partial_bodies() {
        let req: MarketRequest = serde_json::from_str(r#"{"location": "aXc"}"#).unwrap();
        let changes = MarketChanges::from(req);
        assert_eq!(changes.location.as_deref(), Some("aXc"));
        assert!(changes.name.is_none());
        assert!(changes.net_worth.is_none());
    }

    #[test]
    fn net_worth_accepts_string_and_number() {
        let a: MarketRequest = serde_json::from_str(r#"{"net_worth": "12.50"}"#).unwrap();
        let b: MarketRequest = serde_json::from_str(r#"{"net_worth": 12}"#).unwrap();
        assert_eq!(a.net_worth, Some(Amount::new("12.50")));
        assert_eq!(b.net_worth, Some(Amount::new("12")));
    }

    #[test]
    fn net_worth_beyond_decimal_range_still_deserializes() {
        let digits = "9".repeat(40);
        let body = format!(r#"{{"net_worth": "{}"}}"#, digits);
        let req: MarketRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(req.net_worth, Some(Amount::new(digits)));
    }
}
