use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::config::ServerConfig;
use crate::forms::products::ProductPayload;
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::products;

#[get("/products/all")]
/// Return every product as a JSON array.
pub async fn list_products(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let result = run_blocking(config.request_timeout, move || {
        products::list_all_products(repo.get_ref())
    })
    .await;

    match result {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response("Failed to list products", err),
    }
}

#[get("/products/{id:\\d+}")]
pub async fn get_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let id = path.into_inner();
    let result = run_blocking(config.request_timeout, move || {
        products::get_product(repo.get_ref(), id)
    })
    .await;

    match result {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&format!("Failed to get product {id}"), err),
    }
}

#[post("/products")]
/// Create a product and point the `Location` header at it.
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    web::Json(payload): web::Json<ProductPayload>,
) -> impl Responder {
    let result = run_blocking(config.request_timeout, move || {
        products::create_product(repo.get_ref(), payload)
    })
    .await;

    match result {
        Ok(product) => {
            log::info!("Created product {} ({})", product.id, product.code);
            HttpResponse::Created()
                .insert_header((header::LOCATION, format!("/products/{}", product.id)))
                .json(product)
        }
        Err(err) => error_response("Failed to create product", err),
    }
}

#[put("/products/{id:\\d+}")]
pub async fn update_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    web::Json(payload): web::Json<ProductPayload>,
) -> impl Responder {
    let id = path.into_inner();
    let result = run_blocking(config.request_timeout, move || {
        products::update_product(repo.get_ref(), id, payload)
    })
    .await;

    match result {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&format!("Failed to update product {id}"), err),
    }
}

#[delete("/products/{id:\\d+}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let id = path.into_inner();
    let result = run_blocking(config.request_timeout, move || {
        products::delete_product(repo.get_ref(), id)
    })
    .await;

    match result {
        Ok(()) => {
            log::info!("Deleted product {id}");
            HttpResponse::NoContent().finish()
        }
        Err(err) => error_response(&format!("Failed to delete product {id}"), err),
    }
}
