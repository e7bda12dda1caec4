//! Product listing and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use parasol_core::{Price, Product, ProductDetail, ProductId};

use crate::catalog::CatalogError;
use crate::filters;
use crate::middleware::OptionalAdmin;
use crate::routes::Nav;
use crate::state::AppState;

/// Product display data for listing cards.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: String,
    pub rating: f32,
    pub sales: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            image_url: product.image_url.clone(),
            price: format_price(&product.price),
            rating: product.rating,
            sales: format_count(u64::from(product.sales)),
        }
    }
}

/// Product display data for the detail page.
#[derive(Debug, Clone)]
pub struct ProductDetailView {
    pub id: String,
    pub title: String,
    pub price: String,
    pub rating: f32,
    pub sales: String,
    pub description: String,
    pub images: Vec<String>,
    pub shipping: String,
    pub estimated_delivery: String,
    pub store_name: String,
    pub store_rating: f32,
    pub specs: Vec<SpecView>,
}

/// A single label/value row in the specifications table.
#[derive(Debug, Clone)]
pub struct SpecView {
    pub label: String,
    pub value: String,
}

impl From<&ProductDetail> for ProductDetailView {
    fn from(detail: &ProductDetail) -> Self {
        let shipping = if detail.shipping.is_free() {
            "Free".to_owned()
        } else {
            format_price(&detail.shipping.price)
        };
        Self {
            id: detail.product.id.to_string(),
            title: detail.product.title.clone(),
            price: format_price(&detail.product.price),
            rating: detail.product.rating,
            sales: format_count(u64::from(detail.product.sales)),
            description: detail.description.clone(),
            images: detail.images.clone(),
            shipping,
            estimated_delivery: detail.shipping.estimated_delivery.clone(),
            store_name: detail.store.name.clone(),
            store_rating: detail.store.rating,
            specs: detail
                .specs
                .iter()
                .map(|spec| SpecView {
                    label: spec.label.clone(),
                    value: spec.value.clone(),
                })
                .collect(),
        }
    }
}

/// Product listing page, shared by search results and category pages.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ListingTemplate {
    pub heading: String,
    pub products: Vec<ProductCardView>,
    pub nav: Nav,
}

/// Product detail page. `detail` is `None` for unknown ids, which renders
/// the in-page not-found state.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ShowTemplate {
    pub detail: Option<ProductDetailView>,
    pub nav: Nav,
}

/// AI-suggested search queries for a product (HTMX fragment).
#[derive(Template, WebTemplate)]
#[template(path = "partials/recommendations.html")]
pub struct RecommendationsTemplate {
    pub suggestions: Vec<SuggestionView>,
}

/// A suggestion pill linking to its search results.
#[derive(Debug, Clone)]
pub struct SuggestionView {
    pub label: String,
    pub href: String,
}

/// Displays the product detail page.
///
/// Unknown ids get the full page chrome with a not-found message rather
/// than the bare error page, so shoppers keep the header and cart.
#[instrument(skip(state, admin))]
pub async fn show(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
    Path(id): Path<String>,
) -> Response {
    let nav = Nav::for_admin(admin);
    match state.catalog().product_detail(&ProductId::new(id)).await {
        Ok(detail) => ShowTemplate {
            detail: Some(ProductDetailView::from(&detail)),
            nav,
        }
        .into_response(),
        Err(CatalogError::NotFound(id)) => {
            tracing::debug!(product_id = %id, "product detail requested for unknown id");
            (StatusCode::NOT_FOUND, ShowTemplate { detail: None, nav }).into_response()
        }
    }
}

/// Serves the AI suggestion fragment for a product.
///
/// The fragment loads lazily after the page and must always render
/// something, so an unknown id yields an empty suggestion list instead of
/// an error.
#[instrument(skip(state))]
pub async fn recommendations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> RecommendationsTemplate {
    let title = state
        .catalog()
        .products_snapshot()
        .into_iter()
        .find(|product| product.id.as_str() == id)
        .map(|product| product.title);

    let suggestions = match title {
        Some(title) => state.recommender().suggestions_for(&title).await,
        None => {
            tracing::debug!(product_id = %id, "recommendations requested for unknown id");
            Vec::new()
        }
    };

    RecommendationsTemplate {
        suggestions: suggestions
            .into_iter()
            .map(|label| SuggestionView {
                href: format!("/search/{}", urlencoding::encode(&label)),
                label,
            })
            .collect(),
    }
}

/// Formats a price with its currency symbol, like `$29.99`.
pub fn format_price(price: &Price) -> String {
    format!("{}{:.2}", price.currency_code.symbol(), price.amount)
}

/// Formats a count with thousands separators, like `1,245`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}
