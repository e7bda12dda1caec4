//! Home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use parasol_core::Category;

use crate::filters;
use crate::middleware::OptionalAdmin;
use crate::routes::Nav;
use crate::state::AppState;

/// Category display data for the browse grid.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
        }
    }
}

/// Home page with the category grid.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub categories: Vec<CategoryView>,
    pub nav: Nav,
}

/// Displays the home page.
#[instrument(skip(state, admin))]
pub async fn show(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
) -> HomeTemplate {
    let categories = state.catalog().categories().await;
    HomeTemplate {
        categories: categories.iter().map(CategoryView::from).collect(),
        nav: Nav::for_admin(admin),
    }
}
