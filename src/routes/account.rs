//! Account routes. `/albums/:id` is the path existing clients use; `/users/:id` is the
//! canonical alias. Both resolve against the accounts store.

use crate::handlers::account::{create, delete as delete_handler, list, read};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn account_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list))
        .route("/user", post(create))
        .route("/users/:id", get(read).delete(delete_handler))
        .route("/albums/:id", get(read).delete(delete_handler))
        .with_state(state)
}
