//! Search results.

use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use serde::Deserialize;
use tracing::instrument;

use crate::middleware::OptionalAdmin;
use crate::routes::Nav;
use crate::routes::products::{ListingTemplate, ProductCardView};
use crate::state::AppState;

/// Header search form parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Redirects the header search form to the canonical results URL.
///
/// A blank query goes back to the home page instead of an empty results
/// page.
pub async fn submit(Query(params): Query<SearchParams>) -> Redirect {
    let query = params.q.trim();
    if query.is_empty() {
        Redirect::to("/")
    } else {
        Redirect::to(&format!("/search/{}", urlencoding::encode(query)))
    }
}

/// Displays search results for a query.
#[instrument(skip(state, admin))]
pub async fn show(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
    Path(query): Path<String>,
) -> ListingTemplate {
    let products = state.catalog().search(&query).await;
    ListingTemplate {
        heading: format!("Results for \"{query}\""),
        products: products.iter().map(ProductCardView::from).collect(),
        nav: Nav::for_admin(admin),
    }
}
