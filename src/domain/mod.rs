//! Marketplace domain: entities, field rules and repository contracts.

pub mod error;
pub mod market;
pub mod money;
pub mod policy;
pub mod product;
pub mod repositories;
pub mod seller;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use market::{Market, MarketChanges, MarketRepository, NewMarket};
pub use money::Amount;
pub use policy::DeletePolicy;
pub use product::{NewProduct, Product, ProductChanges, ProductDetails, ProductRepository};
pub use repositories::{ReferenceValidator, RepositoryProvider};
pub use seller::{NewSeller, Seller, SellerChanges, SellerDetails, SellerRepository};
pub use validation::Violations;
