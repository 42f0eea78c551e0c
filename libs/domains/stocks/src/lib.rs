//! Stocks Domain
//!
//! On-hand and reorder-threshold quantities, one row per product id.
//! The product id is supplied by the caller and is not checked against
//! the products table.
//!
//! ```rust,no_run
//! use domain_stocks::{handlers, InMemoryStockRepository, StockService};
//!
//! let router = handlers::router(StockService::new(InMemoryStockRepository::new()));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{StockError, StockResult};
pub use handlers::{ApiDoc, URL};
pub use models::{CreateStock, Stock, UpdateStock};
pub use postgres::PgStockRepository;
pub use repository::{InMemoryStockRepository, StockRepository};
pub use service::StockService;
