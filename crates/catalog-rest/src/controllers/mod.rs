//! REST API controllers.

pub mod health_controller;
pub mod legacy_controller;
pub mod product_controller;

pub use health_controller::*;
