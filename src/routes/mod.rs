use std::time::Duration;

use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use tera::{Context, Tera};

use crate::services::{ServiceError, ServiceResult};

pub mod api;
pub mod main;

/// Body of every JSON error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Register every endpoint and the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(main::show_index)
        .service(main::show_privacy)
        .service(main::show_products_table)
        .service(api::list_products)
        .service(api::get_product)
        .service(api::create_product)
        .service(api::update_product)
        .service(api::delete_product);
}

/// CORS policy: any origin when the whitelist is empty, otherwise only the listed ones.
pub fn cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
    }

    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Run synchronous service code on the blocking pool, bounded by `timeout`.
pub async fn run_blocking<F, T>(timeout: Duration, work: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    match actix_web::rt::time::timeout(timeout, web::block(work)).await {
        Ok(Ok(result)) => result,
        Ok(Err(err)) => Err(ServiceError::Internal(format!(
            "blocking task failed: {err}"
        ))),
        Err(_) => Err(ServiceError::Timeout),
    }
}

/// Convert a service failure into the JSON error envelope.
pub fn error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound(message) => HttpResponse::NotFound().json(ErrorBody {
            code: "not_found",
            message,
        }),
        ServiceError::Validation(message) => HttpResponse::BadRequest().json(ErrorBody {
            code: "validation",
            message,
        }),
        ServiceError::Conflict(message) => HttpResponse::Conflict().json(ErrorBody {
            code: "conflict",
            message,
        }),
        ServiceError::Timeout => {
            log::error!("{context}: request timed out");
            HttpResponse::ServiceUnavailable().json(ErrorBody {
                code: "timeout",
                message: "Request timed out".to_string(),
            })
        }
        ServiceError::Internal(message) => {
            log::error!("{context}: {message}");
            HttpResponse::InternalServerError().json(ErrorBody {
                code: "internal",
                message: "Internal server error".to_string(),
            })
        }
    }
}

/// Render a Tera template as an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorBody {
        code: "bad_request",
        message: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorBody {
        code: "bad_request",
        message: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}

/// Path segments that do not parse as an identifier name no existing product.
fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::NotFound().json(ErrorBody {
        code: "not_found",
        message: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}
