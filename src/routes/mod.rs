//! Routers and the assembled application.

mod account;
mod common;

pub use account::account_routes;
pub use common::{common_routes, common_routes_with_ready};

use crate::state::AppState;
use axum::Router;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies larger than this are rejected with 413.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Account routes and operational routes with tracing and a body-size limit.
pub fn app(pool: PgPool) -> Router {
    let state = AppState::from_pool(pool.clone());
    Router::new()
        .merge(common_routes_with_ready(pool))
        .merge(account_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES)),
        )
}
