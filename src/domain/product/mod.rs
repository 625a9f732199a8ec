//! Product aggregate

pub mod model;
pub mod repository;

pub use model::{NewProduct, Product, ProductChanges, ProductDetails};
pub use repository::ProductRepository;
