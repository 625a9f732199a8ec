//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod market_repository;
pub mod product_repository;
pub mod references;
pub mod repository_provider;
pub mod seller_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::validation::MONEY_DECIMAL_PLACES;
use crate::domain::{DomainError, DomainResult};

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Every amount carries exactly two decimal places.
fn money(mut value: Decimal) -> Decimal {
    value.rescale(MONEY_DECIMAL_PLACES);
    value
}

/// Money columns hold decimal text so nothing is lost to floating point.
fn money_to_db(value: Decimal) -> String {
    money(value).to_string()
}

fn money_from_db(text: &str) -> DomainResult<Decimal> {
    Decimal::from_str(text)
        .map(money)
        .map_err(|e| DomainError::Database(format!("invalid stored amount {:?}: {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_restores_two_places() {
        assert_eq!(money(Decimal::from(10)).to_string(), "10.00");
        assert_eq!(money(Decimal::from_str("2.5").unwrap()).to_string(), "2.50");
    }

    #[test]
    fn stored_text_round_trips_exactly() {
        let value = Decimal::from_str("123456789012345678.99").unwrap();
        let text = money_to_db(value);
        assert_eq!(text, "123456789012345678.99");
        assert_eq!(money_from_db(&text).unwrap(), value);
        assert_eq!(money_to_db(Decimal::from(12)), "12.00");
    }

    #[test]
    fn corrupt_stored_amount_is_a_database_error() {
        let err = money_from_db("twelve").unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));
    }
}
