//! Product Entity
//!
//! The backend only exposes the list; single products are looked up in it.

use serde::{Deserialize, Serialize};
use super::entity::{ApiError, ApiResult, Entity};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Image URL
    pub thumbnail: String,
}

/// Body posted when adding a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
}

impl Product {
    /// Find a product in an already fetched list
    pub fn find_in(products: &[Product], id: u32) -> ApiResult<Product> {
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("product {}", id)))
    }

    /// Price as shown on cards
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

impl Entity for Product {
    type Draft = ProductDraft;

    const NAME: &'static str = "product";
    const LIST_FIELD: &'static str = "products";
    const LIST_PATH: &'static str = "/product";
    const DETAIL_PATH: &'static str = "/product";
    const WRITE_PATH: &'static str = "/product";
    const CREATE_PATH: &'static str = "/product/add";
    const LIST_ROUTE: &'static str = "/product";
    const DETAIL_ROUTE: &'static str = "/product";

    fn id(&self) -> u32 {
        self.id
    }

    fn summary(&self) -> String {
        format!("{} - {}", self.title, self.display_price())
    }
}
