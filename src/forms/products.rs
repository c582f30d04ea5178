use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};

/// Maximum allowed length for a product code.
pub const CODE_MAX_LEN: u64 = 9;
/// Maximum allowed length for a product name.
pub const NAME_MAX_LEN: u64 = 90;
/// Maximum allowed length for a category.
pub const CATEGORY_MAX_LEN: u64 = 28;
/// Maximum allowed length for a brand.
pub const BRAND_MAX_LEN: u64 = 28;
/// Maximum allowed length for a product type.
pub const TYPE_MAX_LEN: u64 = 21;
/// Maximum allowed length for a description.
pub const DESCRIPTION_MAX_LEN: u64 = 180;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A required field is blank once surrounding whitespace is removed.
    #[error("`{field}` cannot be empty")]
    EmptyField { field: &'static str },
}

/// JSON body accepted by the create and update endpoints.
///
/// Client supplied timestamps are not part of the payload and are silently
/// dropped during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    /// Identifier echoed by the client; only checked on update.
    #[serde(default)]
    pub id: Option<i32>,
    pub code: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Trimmed field values shared by the create and update conversions.
///
/// Length limits apply to the trimmed text.
#[derive(Debug, Validate)]
struct SanitizedProduct {
    #[validate(length(min = 1, max = CODE_MAX_LEN))]
    code: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    name: String,
    #[validate(length(min = 1, max = CATEGORY_MAX_LEN))]
    category: String,
    #[validate(length(max = BRAND_MAX_LEN))]
    brand: Option<String>,
    #[validate(length(max = TYPE_MAX_LEN))]
    product_type: Option<String>,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    description: Option<String>,
}

impl ProductPayload {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self, now: NaiveDateTime) -> ProductFormResult<NewProduct> {
        let fields = self.sanitize()?;

        let mut new_product = NewProduct::new(fields.code, fields.name, fields.category, now);

        if let Some(brand) = fields.brand {
            new_product = new_product.with_brand(brand);
        }

        if let Some(product_type) = fields.product_type {
            new_product = new_product.with_type(product_type);
        }

        if let Some(description) = fields.description {
            new_product = new_product.with_description(description);
        }

        Ok(new_product)
    }

    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self, updated_at: NaiveDateTime) -> ProductFormResult<UpdateProduct> {
        let fields = self.sanitize()?;

        Ok(UpdateProduct {
            code: fields.code,
            name: fields.name,
            category: fields.category,
            brand: fields.brand,
            product_type: fields.product_type,
            description: fields.description,
            updated_at,
        })
    }

    fn sanitize(self) -> ProductFormResult<SanitizedProduct> {
        let fields = SanitizedProduct {
            code: required("code", &self.code)?,
            name: required("name", &self.name)?,
            category: required("category", &self.category)?,
            brand: optional(self.brand.as_deref()),
            product_type: optional(self.product_type.as_deref()),
            description: optional(self.description.as_deref()),
        };
        fields.validate()?;

        Ok(fields)
    }
}

fn required(field: &'static str, value: &str) -> ProductFormResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProductFormError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
