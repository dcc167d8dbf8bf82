//! Application layer: the services handlers call into.
//!
//! [`services::ShortenService`] allocates codes and creates records;
//! [`services::ResolveService`] resolves codes, counts clicks, and evicts
//! expired records.

pub mod services;
