//! Seller domain entity

use validator::Validate;

use crate::domain::validation::{not_blank, require, Violations};
use crate::domain::Market;

/// A seller trading in zero or more markets.
#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub id: i32,
    pub name: String,
    pub contact_info: String,
    /// Ids of the markets this seller is associated with, ascending
    pub market_ids: Vec<i32>,
}

impl Seller {
    /// Merge supplied fields; a supplied market set replaces the old one.
    pub fn apply(&mut self, changes: SellerChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(contact_info) = changes.contact_info {
            self.contact_info = contact_info;
        }
        if let Some(mut market_ids) = changes.market_ids {
            market_ids.sort_unstable();
            self.market_ids = market_ids;
        }
    }
}

/// Seller together with the markets it is associated with.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerDetails {
    pub seller: Seller,
    pub markets: Vec<Market>,
}

/// Fields for a seller that does not exist yet.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewSeller {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub contact_info: String,
    /// Initial market set; every id must exist when the seller is stored
    pub market_ids: Vec<i32>,
}

impl NewSeller {
    pub fn violations(&self) -> Violations {
        Violations::collect(self.validate())
    }
}

/// Partial seller update. `market_ids` replaces the whole set when present.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SellerChanges {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub contact_info: Option<String>,
    pub market_ids: Option<Vec<i32>>,
}

impl SellerChanges {
    pub fn violations(&self) -> Violations {
        Violations::collect(self.validate())
    }
}

impl TryFrom<SellerChanges> for NewSeller {
    type Error = Violations;

    fn try_from(changes: SellerChanges) -> Result<Self, Self::Error> {
        let mut violations = changes.violations();
        let name = require(&mut violations, "name", changes.name);
        let contact_info = require(&mut violations, "contact_info", changes.contact_info);
        let market_ids = require(&mut violations, "markets", changes.market_ids);

        match (name, contact_info, market_ids) {
            (Some(name), Some(contact_info), Some(market_ids)) if violations.is_empty() => {
                Ok(NewSeller {
                    name,
                    contact_info,
                    market_ids,
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

    #[test]
    fn apply_replaces_market_set_wholesale() {
        let mut seller = Seller {
            id: 7,
            name: "S".into(),
            contact_info: "c".into(),
            market_ids: vec![1, 2, 3],
        };
        seller.apply(SellerChanges {
            market_ids: Some(vec![9, 4]),
            ..Default::default()
        });
        assert_eq!(seller.market_ids, vec![4, 9]);
        assert_eq!(seller.name, "S");
        assert_eq!(seller.contact_info, "c");
    }

    #[test]
    fn apply_without_markets_keeps_the_set() {
        let mut seller = Seller {
            id: 7,
            name: "S".into(),
            contact_info: "c".into(),
            market_ids: vec![1],
        };
        seller.apply(SellerChanges {
            name: Some("T".into()),
            ..Default::default()
        });
        assert_eq!(seller.name, "T");
        assert_eq!(seller.market_ids, vec![1]);
    }

    #[test]
    fn create_requires_market_list() {
        let violations = NewSeller::try_from(SellerChanges {
            name: Some("S".into()),
            contact_info: Some("c".into()),
            market_ids: None,
        })
        .unwrap_err();
        assert_eq!(violations.field("markets"), [REQUIRED]);
        assert!(violations.field("name").is_empty());
    }

    #[test]
    fn empty_market_list_is_a_valid_create() {
        let new = NewSeller::try_from(SellerChanges {
            name: Some("S".into()),
            contact_info: Some("c".into()),
            market_ids: Some(Vec::new()),
        })
        .unwrap();
        assert!(new.market_ids.is_empty());
    }

    #[test]
    fn overlong_contact_info_is_rejected() {
        let new = NewSeller {
            name: "S".into(),
            contact_info: "c".repeat(300),
            market_ids: vec![],
        };
        assert_eq!(
            new.violations().field("contact_info"),
            ["Ensure this field has no more than 255 characters."]
        );
    }
}
