//! HTTP transport for collection listings.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /collection/:id?order=&platform=&page=` — one listing page as JSON.
//! - `GET /health` — health check returning `{ "ok": true }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use storefront::{http, InMemoryCatalogStore, Storefront};
//!
//! let storefront = Arc::new(Storefront::new(InMemoryCatalogStore::load_json("catalog.json")?));
//! http::serve(storefront, "0.0.0.0:8080").await?;
//! ```

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, warn};

use crate::listing::{ListingError, Storefront};
use crate::store::CatalogStore;

type QueryPairs = Vec<(String, String)>;

/// Build an axum `Router` serving listings from the given storefront.
pub fn router<S: CatalogStore + 'static>(storefront: Arc<Storefront<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/collection", get(missing_id_handler::<S>))
        .route("/collection/:id", get(collection_handler::<S>))
        .with_state(storefront)
}

/// Serve listings over HTTP at the given address (e.g. `"0.0.0.0:8080"`).
pub async fn serve<S: CatalogStore + 'static>(
    storefront: Arc<Storefront<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(storefront);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// `GET /collection/:id` — one page of the collection listing.
async fn collection_handler<S: CatalogStore + 'static>(
    State(storefront): State<Arc<Storefront<S>>>,
    Path(id): Path<String>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(query)) => respond(&storefront, Some(&id), &query),
        Err(rejection) => malformed_query(Some(&id), rejection),
    }
}

/// `GET /collection` — no id in the path.
async fn missing_id_handler<S: CatalogStore + 'static>(
    State(storefront): State<Arc<Storefront<S>>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(query)) => respond(&storefront, None, &query),
        Err(rejection) => malformed_query(None, rejection),
    }
}

fn respond<S: CatalogStore>(
    storefront: &Storefront<S>,
    id: Option<&str>,
    query: &[(String, String)],
) -> Response {
    match storefront.list(id, query) {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => error_response(id, e),
    }
}

/// Keep extractor failures on the same `{"error": ..}` body as every other 4xx.
fn malformed_query(id: Option<&str>, rejection: QueryRejection) -> Response {
    error_response(id, ListingError::MalformedQuery(rejection.body_text()))
}

fn error_response(id: Option<&str>, e: ListingError) -> Response {
    if e.is_internal() {
        error!(collection = id, error = %e, "listing failed");
    } else {
        warn!(collection = id, error = %e, "listing rejected");
    }
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = if e.is_internal() {
        "internal server error".to_string()
    } else {
        e.to_string()
    };
    (status, Json(json!({ "error": message }))).into_response()
}
