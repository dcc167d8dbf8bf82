//! Request and response shapes, serialized with serde.

pub mod health;
pub mod shorten;
