use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    #[diesel(column_name = type_)]
    pub product_type: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product)]
pub struct NewProduct<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub brand: Option<&'a str>,
    #[diesel(column_name = type_)]
    pub product_type: Option<&'a str>,
    pub description: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::product)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub brand: Option<&'a str>,
    #[diesel(column_name = type_)]
    pub product_type: Option<&'a str>,
    pub description: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            code: value.code,
            name: value.name,
            category: value.category,
            brand: value.brand,
            product_type: value.product_type,
            description: value.description,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            code: value.code.as_str(),
            name: value.name.as_str(),
            category: value.category.as_str(),
            brand: value.brand.as_deref(),
            product_type: value.product_type.as_deref(),
            description: value.description.as_deref(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            code: value.code.as_str(),
            name: value.name.as_str(),
            category: value.category.as_str(),
            brand: value.brand.as_deref(),
            product_type: value.product_type.as_deref(),
            description: value.description.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
