use chrono::Utc;

use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::ProductPayload;
use crate::repository::{ProductReader, ProductWriter, RepositoryError};
use crate::services::{ServiceError, ServiceResult};

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Product with ID {id} not found"))
}

fn duplicate_code(code: &str, err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::UniqueViolation(_) => {
            ServiceError::Conflict(format!("Product code `{code}` already exists"))
        }
        other => ServiceError::from(other),
    }
}

/// Returns every product in storage order.
pub fn list_all_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    let (_, products) = repo
        .list_products(ProductListQuery::new())
        .map_err(ServiceError::from)?;
    Ok(products)
}

/// Fetches a single product.
pub fn get_product<R>(repo: &R, id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| not_found(id))
}

/// Creates a new product. Any client supplied id or timestamps are ignored.
pub fn create_product<R>(repo: &R, payload: ProductPayload) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = payload.into_new_product(Utc::now().naive_utc())?;

    repo.create_product(&new_product)
        .map_err(|err| duplicate_code(&new_product.code, err))
}

/// Overwrites every mutable field of an existing product.
///
/// The payload must carry the same id as the path; a mismatch is rejected
/// before the store is touched.
pub fn update_product<R>(repo: &R, id: i32, payload: ProductPayload) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    if payload.id != Some(id) {
        return Err(ServiceError::Validation("ID mismatch".to_string()));
    }

    let updates = payload.into_update_product(Utc::now().naive_utc())?;

    repo.update_product(id, &updates).map_err(|err| match err {
        RepositoryError::NotFound => not_found(id),
        other => duplicate_code(&updates.code, other),
    })
}

/// Hard-deletes a product.
pub fn delete_product<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(id).map_err(|err| match err {
        RepositoryError::NotFound => not_found(id),
        other => ServiceError::from(other),
    })
}
