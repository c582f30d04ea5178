use chrono::NaiveDateTime;
use pushkind_common::pagination::Pagination;
use serde::{Deserialize, Serialize};

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Short catalog code, unique across all products.
    pub code: String,
    /// Human-readable name of the product.
    pub name: String,
    /// Catalog category the product belongs to.
    pub category: String,
    /// Optional manufacturer or brand name.
    pub brand: Option<String>,
    /// Optional product type, exposed as `type` on the wire.
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    pub product_type: Option<String>,
    pub description: Option<String>,
    /// Creation instant; `updated_at` starts out equal to it.
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload stamped with the supplied instant.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            brand: None,
            product_type: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a brand to the product payload.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Attach a product type to the product payload.
    pub fn with_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Full replacement of the mutable product fields.
///
/// `created_at` is deliberately absent: it is never touched after insertion.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub code: String,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    pub product_type: Option<String>,
    pub description: Option<String>,
    pub updated_at: NaiveDateTime,
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query that targets every product.
    pub fn new() -> Self {
        Self { pagination: None }
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
