//! Suppliers Domain
//!
//! CRUD for the companies products are bought from.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /add, /get-by-id/{id}, /update/{id}, /delete/{id}, /get-all
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation, duplicate-name checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + in-memory and Postgres implementations
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_suppliers::{handlers, InMemorySupplierRepository, SupplierService};
//!
//! let service = SupplierService::new(InMemorySupplierRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{SupplierError, SupplierResult};
pub use handlers::{ApiDoc, URL};
pub use models::{CreateSupplier, Supplier, UpdateSupplier};
pub use postgres::PgSupplierRepository;
pub use repository::{InMemorySupplierRepository, SupplierRepository};
pub use service::SupplierService;
