//! Market domain entity

use rust_decimal::Decimal;
use validator::Validate;

use crate::domain::money::Amount;
use crate::domain::validation::{
    not_blank, require, validate_decimal, validate_location, Violations, MONEY_DECIMAL_PLACES,
    NET_WORTH_MAX_DIGITS,
};

/// A market where sellers trade.
///
/// Markets do not own their sellers; the seller relation lives in the
/// seller's market set.
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub net_worth: Decimal,
}

impl Market {
    /// Merge supplied fields onto this market; omitted fields keep their value.
    pub fn apply(&mut self, changes: MarketChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(net_worth) = changes.net_worth.as_ref().and_then(Amount::to_decimal) {
            self.net_worth = net_worth;
        }
    }
}

/// Fields for a market that does not exist yet.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewMarket {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub location: String,
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub description: String,
    pub net_worth: Decimal,
}

impl NewMarket {
    /// Every field rule violated by this input.
    pub fn violations(&self) -> Violations {
        let mut violations = Violations::collect(self.validate());
        violations.extend("location", validate_location(&self.location));
        violations.extend(
            "net_worth",
            validate_decimal(
                &Amount::from(self.net_worth),
                NET_WORTH_MAX_DIGITS,
                MONEY_DECIMAL_PLACES,
            ),
        );
        violations
    }
}

/// Partial market update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct MarketChanges {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub location: Option<String>,
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub description: Option<String>,
    /// Applied only once it has passed [`MarketChanges::violations`]
    pub net_worth: Option<Amount>,
}

impl MarketChanges {
    /// Field rules for the supplied fields only.
    pub fn violations(&self) -> Violations {
        let mut violations = Violations::collect(self.validate());
        if let Some(location) = &self.location {
            violations.extend("location", validate_location(location));
        }
        if let Some(net_worth) = &self.net_worth {
            violations.extend(
                "net_worth",
                validate_decimal(net_worth, NET_WORTH_MAX_DIGITS, MONEY_DECIMAL_PLACES),
            );
        }
        violations
    }
}

/// A create request arrives with every field optional; missing ones are
/// reported together with any rule the present ones break.
impl TryFrom<MarketChanges> for NewMarket {
    type Error = Violations;

    fn try_from(changes: MarketChanges) -> Result<Self, Self::Error> {
        let mut violations = changes.violations();
        let name = require(&mut violations, "name", changes.name);
        let location = require(&mut violations, "location", changes.location);
        let description = require(&mut violations, "description", changes.description);
        let net_worth = require(&mut violations, "net_worth", changes.net_worth)
            .as_ref()
            .and_then(Amount::to_decimal);

        match (name, location, description, net_worth) {
            (Some(name), Some(location), Some(description), Some(net_worth))
                if violations.is_empty() =>
            {
                Ok(NewMarket {
                    name,
                    location,
                    description,
                    net_worth,
                })
            }
            _ => Err(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{BLANK, REQUIRED};
    use std::str::FromStr;

    fn sample() -> NewMarket {
        NewMarket {
            name: "A".into(),
            location: "abc".into(),
            description: "d".into(),
            net_worth: Decimal::from_str("10.00").unwrap(),
        }
    }

    #[test]
    fn valid_market_has_no_violations() {
        assert!(sample().violations().is_empty());
    }

    #[test]
    fn forbidden_location_reports_every_character() {
        let market = NewMarket {
            location: "aXcY".into(),
            ..sample()
        };
        let violations = market.violations();
        assert_eq!(
            violations.field("location"),
            ["Please No X in location", "Please No Y in location"]
        );
    }

    #[test]
    fn overlong_name_is_rejected() {
        let market = NewMarket {
            name: "n".repeat(256),
            ..sample()
        };
        assert_eq!(
            market.violations().field("name"),
            ["Ensure this field has no more than 255 characters."]
        );
    }

    #[test]
    fn name_of_exactly_255_chars_is_accepted() {
        let market = NewMarket {
            name: "n".repeat(255),
            ..sample()
        };
        assert!(market.violations().is_empty());
    }

    #[test]
    fn net_worth_with_three_places_is_rejected() {
        let market = NewMarket {
            net_worth: Decimal::from_str("1.001").unwrap(),
            ..sample()
        };
        assert_eq!(
            market.violations().field("net_worth"),
            ["Ensure that there are no more than 2 decimal places."]
        );
    }

    #[test]
    fn apply_changes_only_supplied_fields() {
        let mut market = Market {
            id: 1,
            name: "A".into(),
            location: "abc".into(),
            description: "d".into(),
            net_worth: Decimal::from_str("10.00").unwrap(),
        };
        market.apply(MarketChanges {
            description: Some("new".into()),
            ..Default::default()
        });
        assert_eq!(market.description, "new");
        assert_eq!(market.name, "A");
        assert_eq!(market.location, "abc");
        assert_eq!(market.net_worth, Decimal::from_str("10.00").unwrap());
    }

    #[test]
    fn oversized_net_worth_is_a_field_violation() {
        let changes = MarketChanges {
            net_worth: Some(Amount::new("1".repeat(101))),
            ..Default::default()
        };
        assert_eq!(
            changes.violations().field("net_worth"),
            ["Ensure that there are no more than 100 digits in total."]
        );
    }

    #[test]
    fn create_from_changes_reports_missing_and_invalid_fields_together() {
        let violations = NewMarket::try_from(MarketChanges {
            name: Some(" ".into()),
            location: Some("aXc".into()),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(violations.field("name"), [BLANK]);
        assert_eq!(violations.field("location"), ["Please No X in location"]);
        assert_eq!(violations.field("description"), [REQUIRED]);
        assert_eq!(violations.field("net_worth"), [REQUIRED]);
    }

    #[test]
    fn create_from_complete_changes_succeeds() {
        let new = NewMarket::try_from(MarketChanges {
            name: Some("A".into()),
            location: Some("abc".into()),
            description: Some("d".into()),
            net_worth: Some(Amount::new("10.00")),
        })
        .unwrap();
        assert_eq!(new, sample());
    }
}
