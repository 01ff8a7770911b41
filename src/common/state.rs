// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::token::TokenService;

/// Application state containing the database pool and the token service.
///
/// The token service holds the signing secret for the process lifetime; it is
/// constructed once in `main` and injected here rather than read from ambient
/// globals at request time.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub tokens: Arc<TokenService>,
}
