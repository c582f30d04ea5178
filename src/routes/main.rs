use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{render_template, run_blocking};
use crate::services::main::{self as main_service, IndexQuery};

#[actix_web::routes]
#[get("/")]
#[get("/Home/Index")]
pub async fn show_index(
    params: web::Query<IndexQuery>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.into_inner();
    let result = run_blocking(config.request_timeout, move || {
        main_service::load_index_page(repo.get_ref(), query)
    })
    .await;

    match result {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("current_page", "index");
            context.insert("products", &data.products);
            context.insert("page", &data.page);
            context.insert("page_size", &data.page_size);
            context.insert("total", &data.total);
            context.insert("total_pages", &data.total_pages);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load products page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/Home/Privacy")]
pub async fn show_privacy(tera: web::Data<Tera>) -> impl Responder {
    let mut context = Context::new();
    context.insert("current_page", "privacy");
    render_template(&tera, "main/privacy.html", &context)
}

#[get("/products/view")]
/// Render every product as a plain HTML table.
pub async fn show_products_table(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let result = run_blocking(config.request_timeout, move || {
        main_service::load_products_table(repo.get_ref())
    })
    .await;

    match result {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("products", &data.products);
            render_template(&tera, "products/table.html", &context)
        }
        Err(err) => {
            log::error!("Failed to generate products view: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
