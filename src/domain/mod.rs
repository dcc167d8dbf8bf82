//! Domain layer: entities and data-access contracts.
//!
//! [`entities`] defines the URL record itself; [`repositories`] the trait
//! the storage layer implements. Nothing here depends on Axum or sqlx,
//! so services built on these types can be tested against mocks.

pub mod entities;
pub mod repositories;
