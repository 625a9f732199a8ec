//! Seller aggregate
//!
//! Contains the Seller entity, its market associations and the repository
//! interface.

pub mod model;
pub mod repository;

pub use model::{NewSeller, Seller, SellerChanges, SellerDetails};
pub use repository::SellerRepository;
