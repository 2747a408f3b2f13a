use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::collection::{FieldErrors, IdPolicy, InsertPosition, KindSpec, Record, RecordId};
use crate::constants::{DEFAULT_PRODUCT_RATING, LOW_STOCK_THRESHOLD};

labelled_enum! {
    ProductCategory {
        Electronics => "Electronics",
        Gaming => "Gaming",
        Office => "Office",
        Accessories => "Accessories",
    }
}

labelled_enum! {
    /// Stock badge shown next to a product.
    StockLevel {
        OutOfStock => "Out of Stock",
        Low => "Low Stock",
        InStock => "In Stock",
    }
}

impl StockLevel {
    pub fn for_quantity(stock: u32) -> Self {
        if stock == 0 {
            StockLevel::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub price: f64,
    pub category: ProductCategory,
    pub stock: u32,
    /// 0.0 to 5.0
    pub rating: f32,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::for_quantity(self.stock)
    }
}

/// Price and stock arrive from free-text inputs and may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub category: ProductCategory,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64, stock: u32, category: ProductCategory) -> Self {
        Self {
            name: name.into(),
            price: Some(price),
            stock: Some(stock),
            category,
        }
    }
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: None,
            stock: None,
            category: ProductCategory::Electronics,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub category: Option<ProductCategory>,
    pub rating: Option<f32>,
}

impl Record for Product {
    type Class = ProductCategory;
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    const KIND: KindSpec = KindSpec {
        name: "product",
        required_fields: &["name", "price", "stock"],
        searchable_fields: &["name", "category"],
        classification_field: "category",
        unique_field: Some("name"),
        id_policy: IdPolicy::Sequential,
        insert_at: InsertPosition::Back,
    };

    const CLASSES: &'static [ProductCategory] = ProductCategory::ALL;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn classification(&self) -> ProductCategory {
        self.category
    }

    fn searchable_values(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.name), Cow::Borrowed(self.category.as_str())]
    }

    fn unique_value(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn from_draft(id: RecordId, draft: ProductDraft, _now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        if draft.price.is_none() {
            errors.insert("price", "Price is required");
        }
        if draft.stock.is_none() {
            errors.insert("stock", "Stock is required");
        }
        let product = Self {
            id,
            name: draft.name.trim().to_string(),
            price: draft.price.unwrap_or_default(),
            category: draft.category,
            stock: draft.stock.unwrap_or_default(),
            rating: DEFAULT_PRODUCT_RATING,
        };
        if let Err(invalid) = product.validate() {
            errors.merge(invalid);
        }
        errors.into_result().map(|_| product)
    }

    fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Product name is required");
        if !self.price.is_finite() || self.price < 0.0 {
            errors.insert("price", "Price must be zero or more");
        }
        if !(0.0..=5.0).contains(&self.rating) {
            errors.insert("rating", "Rating must be between 0 and 5");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_badges() {
        assert_eq!(StockLevel::for_quantity(0), StockLevel::OutOfStock);
        assert_eq!(StockLevel::for_quantity(14), StockLevel::Low);
        assert_eq!(StockLevel::for_quantity(15), StockLevel::InStock);
        assert_eq!(StockLevel::Low.to_string(), "Low Stock");
    }

    #[test]
    fn draft_without_price_is_rejected() {
        let draft = ProductDraft {
            name: "Widget".into(),
            stock: Some(3),
            ..ProductDraft::default()
        };
        let errors = Product::from_draft(RecordId::Int(1), draft, Utc::now()).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["price"]);
    }

    #[test]
    fn draft_reports_every_problem_at_once() {
        let draft = ProductDraft {
            name: " ".into(),
            price: Some(-5.0),
            ..ProductDraft::default()
        };
        let errors = Product::from_draft(RecordId::Int(1), draft, Utc::now()).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "price", "stock"]);
        assert_eq!(errors.get("price"), Some("Price must be zero or more"));
    }

    #[test]
    fn new_products_get_default_rating() {
        let draft = ProductDraft::new("Widget", 9.99, 3, ProductCategory::Office);
        let product = Product::from_draft(RecordId::Int(1), draft, Utc::now()).unwrap();
        assert_eq!(product.rating, DEFAULT_PRODUCT_RATING);
        assert_eq!(product.stock_level(), StockLevel::Low);
    }
}
