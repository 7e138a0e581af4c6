//! Page routes.
//!
//! Catalog-backed pages load per request: the handler mounts a fresh
//! [`Mount`], starts the catalog fetches, waits at most the render deadline,
//! and renders whatever landed. Returning drops the mount, so fetches still
//! outstanding are abandoned and their results never published.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use axum::routing::get;
use bullion_core::catalog::{Catalog, CatalogStore};
use bullion_core::lifecycle::Mount;
use tracing::debug;

use crate::error::SiteError;
use crate::render::{legal, pages, shell};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/products", get(products))
        .route("/services", get(services))
        .route("/clients", get(clients))
        .route("/about", get(about))
        .route("/privacy-policy", get(privacy_policy))
        .route("/terms-of-service", get(terms_of_service))
        .route("/aml-policy", get(aml_policy))
}

async fn load_catalog(state: &AppState) -> Result<Catalog, SiteError> {
    let mount = Mount::new();
    let store = CatalogStore::new();
    let task = store.spawn_load(Arc::clone(&state.api), mount.scope(), state.product_source);
    match tokio::time::timeout(state.render_deadline, task).await {
        Ok(joined) => joined?,
        Err(_) => debug!(
            deadline_ms = state.render_deadline.as_millis(),
            "catalog still loading at render deadline"
        ),
    }
    let catalog = store.snapshot();
    debug!(
        products = catalog.products.len(),
        spot_price = catalog.spot_price.is_some(),
        "catalog rendered"
    );
    Ok(catalog)
}

async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    let catalog = load_catalog(&state).await?;
    Ok(Html(shell::page(
        "Exclusive Gold Acquisition",
        "/",
        &pages::home(&catalog),
    )))
}

async fn products(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    let catalog = load_catalog(&state).await?;
    Ok(Html(shell::page(
        "Gold Products",
        "/products",
        &pages::products(&catalog),
    )))
}

async fn services() -> Html<String> {
    Html(shell::page("Services", "/services", &pages::services()))
}

async fn clients() -> Html<String> {
    Html(shell::page(
        "Private Client Privileges",
        "/clients",
        &pages::clients(),
    ))
}

async fn about() -> Html<String> {
    Html(shell::page("About Us", "/about", &pages::about()))
}

async fn privacy_policy() -> Html<String> {
    Html(shell::page(
        "Privacy Policy",
        "/privacy-policy",
        &legal::privacy_policy(),
    ))
}

async fn terms_of_service() -> Html<String> {
    Html(shell::page(
        "Terms of Service",
        "/terms-of-service",
        &legal::terms_of_service(),
    ))
}

async fn aml_policy() -> Html<String> {
    Html(shell::page(
        "AML Policy",
        "/aml-policy",
        &legal::aml_policy(),
    ))
}

/// Fallback for every unmatched path.
pub async fn not_found(uri: Uri) -> SiteError {
    SiteError::NotFound(uri.path().to_owned())
}
