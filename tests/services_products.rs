use product_catalog::forms::products::ProductPayload;
use product_catalog::repository::{DieselRepository, ProductReader};
use product_catalog::services::ServiceError;
use product_catalog::services::main::{IndexQuery, load_index_page, load_products_table};
use product_catalog::services::products;

mod common;

fn payload(code: &str) -> ProductPayload {
    ProductPayload {
        id: None,
        code: code.to_string(),
        name: "Oolong".to_string(),
        category: "Tea".to_string(),
        brand: Some("Hills".to_string()),
        product_type: Some("Loose leaf".to_string()),
        description: Some("Lightly oxidised".to_string()),
    }
}

#[test]
fn create_product_round_trips_every_field() {
    let test_db = common::TestDb::new("service_create_round_trip.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = products::create_product(&repo, payload("TEA01")).expect("create product");
    assert_eq!(created.created_at, created.updated_at);

    let fetched = products::get_product(&repo, created.id).expect("fetch product");
    assert_eq!(fetched, created);
    assert_eq!(fetched.code, "TEA01");
    assert_eq!(fetched.name, "Oolong");
    assert_eq!(fetched.category, "Tea");
    assert_eq!(fetched.brand.as_deref(), Some("Hills"));
    assert_eq!(fetched.product_type.as_deref(), Some("Loose leaf"));
    assert_eq!(fetched.description.as_deref(), Some("Lightly oxidised"));
}

#[test]
fn create_product_with_duplicate_code_conflicts() {
    let test_db = common::TestDb::new("service_create_duplicate.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = products::create_product(&repo, payload("TEA01")).expect("create product");

    let mut second = payload("TEA01");
    second.name = "Another".to_string();
    let result = products::create_product(&repo, second);
    assert!(matches!(result, Err(ServiceError::Conflict(_))));

    let stored = products::get_product(&repo, first.id).expect("fetch product");
    assert_eq!(stored, first);
}

#[test]
fn update_product_keeps_created_at_and_refreshes_updated_at() {
    let test_db = common::TestDb::new("service_update_timestamps.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = products::create_product(&repo, payload("TEA01")).expect("create product");

    let mut changes = payload("TEA02");
    changes.id = Some(created.id);
    changes.brand = None;
    let updated = products::update_product(&repo, created.id, changes).expect("update product");

    assert_eq!(updated.code, "TEA02");
    assert_eq!(updated.brand, None);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn update_product_with_mismatched_id_leaves_row_untouched() {
    let test_db = common::TestDb::new("service_update_mismatch.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = products::create_product(&repo, payload("TEA01")).expect("create product");

    let mut changes = payload("TEA02");
    changes.id = Some(created.id + 1);
    let result = products::update_product(&repo, created.id, changes);
    assert!(matches!(result, Err(ServiceError::Validation(_))));

    let stored = products::get_product(&repo, created.id).expect("fetch product");
    assert_eq!(stored, created);
}

#[test]
fn update_missing_product_is_not_found() {
    let test_db = common::TestDb::new("service_update_missing.db");
    let repo = DieselRepository::new(test_db.pool());

    let mut changes = payload("TEA02");
    changes.id = Some(77);
    let result = products::update_product(&repo, 77, changes);
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
    assert_eq!(repo.count_products().expect("count"), 0);
}

#[test]
fn delete_then_get_is_not_found() {
    let test_db = common::TestDb::new("service_delete_then_get.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = products::create_product(&repo, payload("TEA01")).expect("create product");
    products::delete_product(&repo, created.id).expect("delete product");

    let result = products::get_product(&repo, created.id);
    assert!(matches!(result, Err(ServiceError::NotFound(_))));

    let result = products::delete_product(&repo, created.id);
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[test]
fn index_page_and_table_cover_twelve_products() {
    let test_db = common::TestDb::new("service_index_pages.db");
    let repo = DieselRepository::new(test_db.pool());

    for index in 1..=12 {
        products::create_product(&repo, payload(&format!("T{index:02}"))).expect("create product");
    }

    let page_one = load_index_page(&repo, IndexQuery::default()).expect("page one");
    assert_eq!(page_one.products.len(), 5);
    assert_eq!(page_one.total_pages, 3);

    let page_three = load_index_page(
        &repo,
        IndexQuery {
            page: Some(3),
            page_size: Some(5),
        },
    )
    .expect("page three");
    assert_eq!(page_three.products.len(), 2);

    let page_four = load_index_page(
        &repo,
        IndexQuery {
            page: Some(4),
            page_size: Some(5),
        },
    )
    .expect("page four");
    assert!(page_four.products.is_empty());

    let table = load_products_table(&repo).expect("table");
    let all = products::list_all_products(&repo).expect("list all");
    assert_eq!(table.products.len(), all.len());
    assert_eq!(all.len(), 12);
}
