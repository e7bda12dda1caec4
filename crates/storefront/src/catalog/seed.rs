//! Seed data for the mock catalog.
//!
//! Category ids and product ids/titles are stable across boots so bookmarked
//! pages keep resolving, while prices, ratings and sales figures are rolled
//! fresh at startup so listings do not look frozen.

use parasol_core::{
    Category, Price, Product, ProductDetail, ProductId, ShippingInfo, SpecEntry, StoreInfo,
};
use rand::Rng;
use rust_decimal::Decimal;

/// Number of products seeded at startup.
pub const SEED_PRODUCT_COUNT: u32 = 20;

const DESCRIPTION: &str = "A beautiful and elegant maxi dress perfect for summer occasions. \
    Featuring a vibrant floral pattern, a flattering V-neck, and a comfortable, lightweight \
    fabric. This dress is perfect for beach trips, parties, or casual outings.";

/// The fixed category list shown on the home page.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("women-clothing", "Women's Clothing"),
        Category::new("men-clothing", "Men's Clothing"),
        Category::new("cellphones", "Cellphones & Telecommunications"),
        Category::new("computer-office", "Computer & Office"),
        Category::new("consumer-electronics", "Consumer Electronics"),
        Category::new("jewelry-accessories", "Jewelry & Accessories"),
        Category::new("home-garden", "Home & Garden"),
        Category::new("shoes", "Shoes"),
    ]
}

/// Generate the startup product table.
pub fn products() -> Vec<Product> {
    let mut rng = rand::rng();
    (0..SEED_PRODUCT_COUNT)
        .map(|i| {
            let seed = 1000 + i;
            Product {
                id: ProductId::new(format!("P{seed}")),
                title: format!("Summer Floral Print Dress {}", i + 1),
                image_url: format!("https://picsum.photos/seed/{seed}/400/500"),
                price: Price::usd(Decimal::new(rng.random_range(1000_i64..6000), 2)),
                rating: f32::from(rng.random_range(35_u8..=50)) / 10.0,
                sales: rng.random_range(100_u32..=5099),
            }
        })
        .collect()
}

/// Expand a listed product into its full detail record.
///
/// Every product shares one hand-written description, shipping quote, store
/// card and spec sheet; only the gallery is derived from the product id.
pub fn detail_for(product: Product) -> ProductDetail {
    let images = (1..=3)
        .map(|n| format!("https://picsum.photos/seed/{id}-{n}/600/800", id = product.id))
        .collect();
    ProductDetail {
        product,
        description: DESCRIPTION.to_owned(),
        images,
        shipping: ShippingInfo {
            price: Price::zero(),
            estimated_delivery: "15-25 days".to_owned(),
        },
        store: StoreInfo {
            name: "FashionForward Boutique".to_owned(),
            rating: 4.7,
        },
        specs: vec![
            spec("Material", "Polyester, Spandex"),
            spec("Silhouette", "A-Line"),
            spec("Neckline", "V-Neck"),
            spec("Sleeve Length", "Sleeveless"),
            spec("Season", "Summer"),
        ],
    }
}

fn spec(label: &str, value: &str) -> SpecEntry {
    SpecEntry {
        label: label.to_owned(),
        value: value.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_stable() {
        let categories = categories();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories.first().unwrap().id.as_str(), "women-clothing");
        assert_eq!(categories.last().unwrap().name, "Shoes");
    }

    #[test]
    fn test_products_have_stable_ids_and_bounded_figures() {
        let products = products();
        assert_eq!(products.len(), SEED_PRODUCT_COUNT as usize);
        assert_eq!(products.first().unwrap().id.as_str(), "P1000");
        assert_eq!(products.last().unwrap().title, "Summer Floral Print Dress 20");

        for product in &products {
            assert!(product.price.amount >= Decimal::new(1000, 2));
            assert!(product.price.amount < Decimal::new(6000, 2));
            assert!((3.5..=5.0).contains(&product.rating));
            assert!((100..=5099).contains(&product.sales));
        }
    }

    #[test]
    fn test_detail_gallery_follows_product_id() {
        let product = products().remove(3);
        let detail = detail_for(product.clone());

        assert_eq!(detail.product, product);
        assert_eq!(detail.images.len(), 3);
        assert_eq!(
            detail.images.first().unwrap(),
            "https://picsum.photos/seed/P1003-1/600/800"
        );
        assert!(detail.shipping.is_free());
        assert_eq!(detail.store.name, "FashionForward Boutique");
        assert_eq!(detail.specs.len(), 5);
    }
}
