//! HTTP surface of the todo service.
//!
//! # Overview
//! An axum `Router` mapping `/api/hello` and `/api/todos[/{todo_id}]` onto a
//! shared `TodoStore`. Bodies and path ids are validated by extractors before
//! handlers run; failures become 422 responses with field-level detail, and
//! unknown ids become 404 `{"detail": "Todo not found"}`.
//!
//! # Design
//! - `AppState` owns the store behind one `RwLock`, so the collection and the
//!   id counter always change together.
//! - `app()` builds a fresh, empty service; `router(state)` lets tests and
//!   callers seed or share state.
//! - CORS is wide open with credentials, suitable for a local frontend dev
//!   server only.

pub mod config;
pub mod cors;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod observability;
pub mod state;

use axum::{
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use handlers::{Message, GREETING};
pub use state::AppState;
pub use todo_core::{Todo, TodoInput};

/// A router over a new, empty store.
pub fn app() -> Router {
    router(AppState::default())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/hello", get(handlers::hello))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/{todo_id}",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(cors::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
