//! Admin product CRUD.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use parasol_core::{NewProduct, Price, Product, ProductId, ProductPatch};

use crate::catalog::CatalogError;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::routes::Nav;
use crate::state::AppState;

/// Product form page, shared by create and edit.
#[derive(Template, WebTemplate)]
#[template(path = "admin/product_form.html")]
pub struct ProductFormTemplate {
    pub heading: String,
    /// Where the form posts: `/admin/products` for create,
    /// `/admin/products/{id}` for update.
    pub action: String,
    pub title: String,
    pub image_url: String,
    pub price: String,
    pub rating: f32,
    pub sales: u32,
    pub nav: Nav,
}

impl ProductFormTemplate {
    fn blank(nav: Nav) -> Self {
        Self {
            heading: "Create New Product".to_owned(),
            action: "/admin/products".to_owned(),
            title: String::new(),
            image_url: String::new(),
            price: String::new(),
            rating: 0.0,
            sales: 0,
            nav,
        }
    }

    fn for_product(product: &Product, nav: Nav) -> Self {
        Self {
            heading: "Edit Product".to_owned(),
            action: format!("/admin/products/{}", product.id),
            title: product.title.clone(),
            image_url: product.image_url.clone(),
            price: format!("{:.2}", product.price.amount),
            rating: product.rating,
            sales: product.sales,
            nav,
        }
    }
}

/// Product form data for create and update.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub title: String,
    pub image_url: String,
    pub price: Decimal,
    pub rating: f32,
    pub sales: u32,
}

/// Displays the empty product form.
#[instrument(skip(admin))]
pub async fn new_form(RequireAdmin(admin): RequireAdmin) -> ProductFormTemplate {
    ProductFormTemplate::blank(Nav::for_admin(Some(admin)))
}

/// Creates a product from the posted form and returns to the dashboard.
#[instrument(skip(state, _admin, form))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Form(form): Form<ProductForm>,
) -> Redirect {
    state
        .catalog()
        .create(NewProduct {
            title: form.title,
            image_url: form.image_url,
            price: Price::usd(form.price),
            rating: form.rating,
            sales: form.sales,
        })
        .await;
    Redirect::to("/admin")
}

/// Displays the form pre-filled with an existing product.
///
/// If the product was deleted in the meantime the admin lands back on the
/// dashboard instead of an error page.
#[instrument(skip(state, admin))]
pub async fn edit_form(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
) -> Response {
    let id = ProductId::new(id);
    match state.catalog().product_detail(&id).await {
        Ok(detail) => {
            ProductFormTemplate::for_product(&detail.product, Nav::for_admin(Some(admin)))
                .into_response()
        }
        Err(CatalogError::NotFound(id)) => {
            tracing::warn!(product_id = %id, "edit form requested for missing product");
            Redirect::to("/admin").into_response()
        }
    }
}

/// Applies the posted form to an existing product.
#[instrument(skip(state, _admin, form))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let patch = ProductPatch {
        title: Some(form.title),
        image_url: Some(form.image_url),
        price: Some(Price::usd(form.price)),
        rating: Some(form.rating),
        sales: Some(form.sales),
    };
    state.catalog().update(&ProductId::new(id), patch).await?;
    Ok(Redirect::to("/admin"))
}

/// Deletes a product and returns to the dashboard. Deleting an id that is
/// already gone is not an error.
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
) -> Redirect {
    state.catalog().delete(&ProductId::new(id)).await;
    Redirect::to("/admin")
}
