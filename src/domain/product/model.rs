//! Product domain entity

use rust_decimal::Decimal;
use validator::Validate;

use crate::domain::money::Amount;
use crate::domain::validation::{
    not_blank, require, validate_decimal, Violations, MONEY_DECIMAL_PLACES, PRICE_MAX_DIGITS,
};
use crate::domain::{Market, Seller};

/// A product offered by a seller in a market.
///
/// Both references are mandatory but non-owning: removing a product never
/// touches its market or seller.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub market_id: i32,
    pub seller_id: i32,
}

impl Product {
    /// Merge supplied fields onto this product; omitted fields keep their value.
    pub fn apply(&mut self, changes: ProductChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(price) = changes.price.as_ref().and_then(Amount::to_decimal) {
            self.price = price;
        }
        if let Some(market_id) = changes.market_id {
            self.market_id = market_id;
        }
        if let Some(seller_id) = changes.seller_id {
            self.seller_id = seller_id;
        }
    }
}

/// Product with its market and seller resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub product: Product,
    pub market: Market,
    pub seller: Seller,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewProduct {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub market_id: i32,
    pub seller_id: i32,
}

impl NewProduct {
    pub fn violations(&self) -> Violations {
        let mut violations = Violations::collect(self.validate());
        violations.extend(
            "price",
            validate_decimal(
                &Amount::from(self.price),
                PRICE_MAX_DIGITS,
                MONEY_DECIMAL_PLACES,
            ),
        );
        violations
    }
}

/// Partial product update. A changed market or seller id must still resolve.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProductChanges {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
    /// Applied only once it has passed [`ProductChanges::violations`]
    pub price: Option<Amount>,
    pub market_id: Option<i32>,
    pub seller_id: Option<i32>,
}

impl ProductChanges {
    pub fn violations(&self) -> Violations {
        let mut violations = Violations::collect(self.validate());
        if let Some(price) = &self.price {
            violations.extend(
                "price",
                validate_decimal(price, PRICE_MAX_DIGITS, MONEY_DECIMAL_PLACES),
            );
        }
        violations
    }
}

impl TryFrom<ProductChanges> for NewProduct {
    type Error = Violations;

    fn try_from(changes: ProductChanges) -> Result<Self, Self::Error> {
        let mut violations = changes.violations();
        let name = require(&mut violations, "name", changes.name);
        let description = require(&mut violations, "description", changes.description);
        let price = require(&mut violations, "price", changes.price)
            .as_ref()
            .and_then(Amount::to_decimal);
        let market_id = require(&mut violations, "market_id", changes.market_id);
        let seller_id = require(&mut violations, "seller_id", changes.seller_id);

        match (name, description, price, market_id, seller_id) {
            (Some(name), Some(description), Some(price), Some(market_id), Some(seller_id))
                if violations.is_empty() =>
            {
                Ok(NewProduct {
                    name,
                    description,
                    price,
                    market_id,
                    seller_id,
                })
            }
            _ => Err(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::REQUIRED;
    use std::str::FromStr;

    fn sample() -> Product {
        Product {
            id: 3,
            name: "Apples".into(),
            description: "Red".into(),
            price: Decimal::from_str("2.50").unwrap(),
            market_id: 1,
            seller_id: 2,
        }
    }

    #[test]
    fn apply_merges_price_only() {
        let mut product = sample();
        product.apply(ProductChanges {
            price: Some(Amount::new("3.00")),
            ..Default::default()
        });
        let expected = Product {
            price: Decimal::from_str("3.00").unwrap(),
            ..sample()
        };
        assert_eq!(product, expected);
    }

    #[test]
    fn apply_can_move_product_to_another_seller() {
        let mut product = sample();
        product.apply(ProductChanges {
            seller_id: Some(9),
            ..Default::default()
        });
        assert_eq!(product.seller_id, 9);
        assert_eq!(product.market_id, 1);
    }

    #[test]
    fn description_may_be_long() {
        let new = NewProduct {
            name: "Apples".into(),
            description: "x".repeat(10_000),
            price: Decimal::from_str("1.00").unwrap(),
            market_id: 1,
            seller_id: 1,
        };
        assert!(new.violations().is_empty());
    }

    #[test]
    fn create_reports_missing_references() {
        let violations = NewProduct::try_from(ProductChanges {
            name: Some("Apples".into()),
            description: Some("Red".into()),
            price: Some(Amount::new("1.999")),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(violations.field("market_id"), [REQUIRED]);
        assert_eq!(violations.field("seller_id"), [REQUIRED]);
        assert_eq!(
            violations.field("price"),
            ["Ensure that there are no more than 2 decimal places."]
        );
    }
}
