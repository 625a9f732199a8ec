//! Application layer: use cases on top of the repository contracts

pub mod services;

pub use services::{MarketService, ProductService, SellerService};
