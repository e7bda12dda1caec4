//! Catalog state and the mock marketplace API surface.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use parasol_core::{
    Category, CategoryId, NewProduct, Product, ProductDetail, ProductId, ProductPatch,
};
use rand::seq::SliceRandom;

use super::CatalogError;
use super::seed;

/// Artificial delay applied in front of each kind of catalog operation.
#[derive(Debug, Clone, Copy)]
pub struct CatalogLatency {
    pub categories: Duration,
    pub browse: Duration,
    pub detail: Duration,
    pub mutate: Duration,
}

impl CatalogLatency {
    /// Delays tuned to feel like a real marketplace API over the network.
    #[must_use]
    pub const fn simulated() -> Self {
        Self {
            categories: Duration::from_millis(500),
            browse: Duration::from_millis(1000),
            detail: Duration::from_millis(800),
            mutate: Duration::from_millis(500),
        }
    }

    /// No delays. Used by tests and available via `CATALOG_LATENCY=false`.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            categories: Duration::ZERO,
            browse: Duration::ZERO,
            detail: Duration::ZERO,
            mutate: Duration::ZERO,
        }
    }
}

/// Handle to the in-memory catalog.
///
/// Cheap to clone; every clone shares the same product table. Reads clone the
/// rows out so no lock is ever held while a response renders.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    inner: Arc<CatalogStoreInner>,
}

#[derive(Debug)]
struct CatalogStoreInner {
    categories: Vec<Category>,
    products: RwLock<Vec<Product>>,
    latency: CatalogLatency,
}

impl CatalogStore {
    /// Build a store seeded with the startup product table.
    #[must_use]
    pub fn new(latency: CatalogLatency) -> Self {
        Self::with_products(seed::products(), latency)
    }

    /// Build a store over a fixed product table. Used by tests.
    #[must_use]
    pub fn with_products(products: Vec<Product>, latency: CatalogLatency) -> Self {
        Self {
            inner: Arc::new(CatalogStoreInner {
                categories: seed::categories(),
                products: RwLock::new(products),
                latency,
            }),
        }
    }

    /// All categories, in display order.
    pub async fn categories(&self) -> Vec<Category> {
        simulate(self.inner.latency.categories).await;
        self.inner.categories.clone()
    }

    /// Look up a category by id. Synchronous; the category list is fixed.
    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<Category> {
        self.inner
            .categories
            .iter()
            .find(|category| &category.id == id)
            .cloned()
    }

    /// Number of categories. Synchronous; powers the admin dashboard.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.inner.categories.len()
    }

    /// Search the catalog.
    ///
    /// There is no text index behind this storefront. Like the marketplace
    /// API it stands in for, this returns the whole product table in a fresh
    /// random order regardless of the query.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        tracing::debug!(query, "searching catalog");
        simulate(self.inner.latency.browse).await;
        self.shuffled()
    }

    /// Products for a category listing. Same contract as [`Self::search`].
    pub async fn by_category(&self, category_id: &CategoryId) -> Vec<Product> {
        tracing::debug!(category = %category_id, "listing category");
        simulate(self.inner.latency.browse).await;
        self.shuffled()
    }

    /// Full detail record for one product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has the given id.
    pub async fn product_detail(&self, id: &ProductId) -> Result<ProductDetail, CatalogError> {
        simulate(self.inner.latency.detail).await;
        let product = self
            .read_products()
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        Ok(seed::detail_for(product))
    }

    /// Insert a new product at the front of the table and return it with its
    /// assigned id.
    pub async fn create(&self, new_product: NewProduct) -> Product {
        simulate(self.inner.latency.mutate).await;
        let product = new_product.into_product(ProductId::generate());
        self.write_products().insert(0, product.clone());
        tracing::info!(product_id = %product.id, title = %product.title, "product created");
        product
    }

    /// Apply a partial update to an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has the given id.
    pub async fn update(
        &self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Product, CatalogError> {
        simulate(self.inner.latency.mutate).await;
        let mut products = self.write_products();
        let product = products
            .iter_mut()
            .find(|product| &product.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        product.apply(patch);
        let updated = product.clone();
        drop(products);
        tracing::info!(product_id = %id, "product updated");
        Ok(updated)
    }

    /// Remove a product. Returns whether a row was actually removed; deleting
    /// an absent id is not an error.
    pub async fn delete(&self, id: &ProductId) -> bool {
        simulate(self.inner.latency.mutate).await;
        let mut products = self.write_products();
        let before = products.len();
        products.retain(|product| &product.id != id);
        let deleted = products.len() < before;
        drop(products);
        if deleted {
            tracing::info!(product_id = %id, "product deleted");
        }
        deleted
    }

    /// Current product table in insertion order, without simulated latency.
    /// Powers the admin dashboard.
    #[must_use]
    pub fn products_snapshot(&self) -> Vec<Product> {
        self.read_products().clone()
    }

    fn shuffled(&self) -> Vec<Product> {
        let mut products = self.read_products().clone();
        products.shuffle(&mut rand::rng());
        products
    }

    fn read_products(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.inner
            .products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_products(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.inner
            .products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
