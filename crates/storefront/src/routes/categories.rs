//! Category listing pages.

use axum::extract::{Path, State};
use tracing::instrument;

use parasol_core::CategoryId;

use crate::middleware::OptionalAdmin;
use crate::routes::Nav;
use crate::routes::products::{ListingTemplate, ProductCardView};
use crate::state::AppState;

/// Displays the products in a category.
///
/// Unknown category ids still render a listing; the heading falls back to
/// the raw id when there is no category to name it.
#[instrument(skip(state, admin))]
pub async fn show(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
    Path(category_id): Path<String>,
) -> ListingTemplate {
    let category_id = CategoryId::new(category_id);
    let products = state.catalog().by_category(&category_id).await;
    let heading = state.catalog().category(&category_id).map_or_else(
        || format!("Products in {category_id}"),
        |category| format!("Products in {}", category.name),
    );
    ListingTemplate {
        heading,
        products: products.iter().map(ProductCardView::from).collect(),
        nav: Nav::for_admin(admin),
    }
}
