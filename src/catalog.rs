use serde::Deserialize;

pub type ProductId = u32;

/// One catalog entry as the storefront displays it. The `Deserialize` derive
/// matches the JSON shape a real catalog service would return.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x400";

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn placeholder_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Vintage Camera".into(),
            price: 299.99,
            image_url: PLACEHOLDER_IMAGE.into(),
            description: Some("A classic film camera.".into()),
        },
        Product {
            id: 2,
            name: "Wireless Headphones".into(),
            price: 149.5,
            image_url: PLACEHOLDER_IMAGE.into(),
            description: Some("Immersive sound experience.".into()),
        },
        Product {
            id: 3,
            name: "Smartwatch Pro".into(),
            price: 199.0,
            image_url: PLACEHOLDER_IMAGE.into(),
            description: Some("Track your fitness and more.".into()),
        },
    ]
}

/// Stands in for a catalog-service call. Resolves immediately; the home page
/// still drives it through `spawn_local` so swapping in a real request later
/// does not change the call site.
pub async fn fetch_products() -> Vec<Product> {
    placeholder_products()
}
