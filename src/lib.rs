//! Product Compass: the computational core of a product-management dashboard.
//!
//! - [`rice`]: RICE scoring, ranking, and add/remove over caller-owned lists
//! - [`market`]: TAM/SAM/SOM derivation and capture projections
//! - [`roadmap`] / [`competition`]: counts over static seed data
//! - [`dashboard`]: the caller-owned state bundle and its derived snapshot
//! - [`api`]: stateless HTTP JSON boundary over the above

pub mod api;
pub mod competition;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod market;
pub mod models;
pub mod render;
pub mod rice;
pub mod roadmap;

pub use error::{CoreError, Result};
