//! Market aggregate
//!
//! Contains the Market entity, its create/update commands and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{Market, MarketChanges, NewMarket};
pub use repository::MarketRepository;
