//! # Catalog Repository
//!
//! Data access for the product catalog.
//!
//! ```text
//! ProductServiceComponent
//!   ↓  Arc<dyn ProductRepository>
//! MySqlProductRepository        (SQLx, runtime queries)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```
//!
//! [`InMemoryProductRepository`] implements the same trait without a database
//! and backs the service and REST test suites.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::*;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
