//! Application services

mod market;
mod product;
mod seller;

pub use market::MarketService;
pub use product::ProductService;
pub use seller::SellerService;
