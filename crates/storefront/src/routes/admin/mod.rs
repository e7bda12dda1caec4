//! Admin panel: dashboard and product management.
//!
//! Every handler here takes [`RequireAdmin`], so unauthenticated requests
//! are redirected to the login page before any work happens.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use parasol_core::Product;

use crate::filters;
use crate::middleware::RequireAdmin;
use crate::routes::Nav;
use crate::routes::products::{format_count, format_price};
use crate::state::AppState;

pub mod products;

/// Aggregate figures shown in the dashboard stat cards.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total_products: String,
    pub total_categories: String,
    pub total_units_sold: String,
}

/// One row of the dashboard product table.
#[derive(Debug, Clone)]
pub struct ProductRowView {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: String,
    pub sales: String,
}

impl From<&Product> for ProductRowView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            image_url: product.image_url.clone(),
            price: format_price(&product.price),
            sales: format_count(u64::from(product.sales)),
        }
    }
}

/// Admin dashboard.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub stats: DashboardStats,
    pub products: Vec<ProductRowView>,
    pub nav: Nav,
}

/// Displays the dashboard: stat cards plus the full product table.
///
/// Stats are computed from the live table on every request; there is no
/// separate counter to keep in sync.
#[instrument(skip(state, admin))]
pub async fn dashboard(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> DashboardTemplate {
    let products = state.catalog().products_snapshot();
    let units_sold: u64 = products
        .iter()
        .map(|product| u64::from(product.sales))
        .sum();

    DashboardTemplate {
        stats: DashboardStats {
            total_products: format_count(products.len() as u64),
            total_categories: format_count(state.catalog().category_count() as u64),
            total_units_sold: format_count(units_sold),
        },
        products: products.iter().map(ProductRowView::from).collect(),
        nav: Nav::for_admin(Some(admin)),
    }
}
