use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductListQuery};
use crate::repository::ProductReader;
use crate::services::{ServiceError, ServiceResult};

/// Page size used when the listing page is requested without `pageSize`.
pub const DEFAULT_PAGE_SIZE: usize = 5;
/// Upper bound on `pageSize` so a single request cannot load the whole table.
pub const MAX_PAGE_SIZE: usize = 100;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Query parameters accepted by the index page.
///
/// Signed so that zero or negative values clamp instead of failing to parse.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Page number requested by the user interface (1-based).
    pub page: Option<i64>,
    /// Number of products shown per page.
    #[serde(rename = "pageSize")]
    pub page_size: Option<i64>,
}

/// Data required to render the main index template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    /// Rows of the requested page; empty when the page is past the end.
    pub products: Vec<ProductView>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Data required to render the full products table.
#[derive(Debug, Serialize)]
pub struct ProductsTableData {
    pub products: Vec<ProductView>,
}

/// View model exposed to the HTML templates. Missing optional fields render blank.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub product_type: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            code: product.code,
            name: product.name,
            category: product.category,
            brand: product.brand.unwrap_or_default(),
            product_type: product.product_type.unwrap_or_default(),
            description: product.description.unwrap_or_default(),
            created_at: product.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: product.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Loads one page of products for the main index page.
pub fn load_index_page<R>(repo: &R, query: IndexQuery) -> ServiceResult<IndexPageData>
where
    R: ProductReader + ?Sized,
{
    let page = usize::try_from(query.page.unwrap_or(1).max(1)).unwrap_or(usize::MAX);
    let page_size = query
        .page_size
        .and_then(|size| usize::try_from(size.max(1)).ok())
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);

    let (total, products) = repo
        .list_products(ProductListQuery::new().paginate(page, page_size))
        .map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(page_size);

    Ok(IndexPageData {
        products: products.into_iter().map(ProductView::from).collect(),
        page,
        page_size,
        total,
        total_pages,
    })
}

/// Loads every product for the HTML table view.
pub fn load_products_table<R>(repo: &R) -> ServiceResult<ProductsTableData>
where
    R: ProductReader + ?Sized,
{
    let products = crate::services::products::list_all_products(repo)?;

    Ok(ProductsTableData {
        products: products.into_iter().map(ProductView::from).collect(),
    })
}
