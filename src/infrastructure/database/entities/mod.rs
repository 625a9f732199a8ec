//! Database entities module

pub mod market;
pub mod product;
pub mod seller;
pub mod seller_market;

pub use market::Entity as Market;
pub use product::Entity as Product;
pub use seller::Entity as Seller;
pub use seller_market::Entity as SellerMarket;
