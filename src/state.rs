//! Shared application state injected into HTTP handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ResolveService, ShortenService};
use crate::infrastructure::persistence::PgUrlRepository;

/// Shared state threaded through the router.
///
/// Owns the connection pool and the two services built over it; handlers
/// never touch the pool directly except for health checks.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<PgUrlRepository>>,
    pub resolve_service: Arc<ResolveService<PgUrlRepository>>,
    pub db: Arc<PgPool>,
    /// Origin used to compose returned short URLs, without trailing slash
    /// handling concerns (both `http://host` and `http://host/` work).
    pub base_url: String,
}

impl AppState {
    /// Builds the state, wiring both services to one repository.
    pub fn new(db: Arc<PgPool>, base_url: String) -> Self {
        let repository = Arc::new(PgUrlRepository::new(db.clone()));

        Self {
            shorten_service: Arc::new(ShortenService::new(repository.clone())),
            resolve_service: Arc::new(ResolveService::new(repository)),
            db,
            base_url,
        }
    }
}
