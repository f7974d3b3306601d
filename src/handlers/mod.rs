pub mod employee;

use actix_web::{web, HttpResponse};

use crate::errors::AppError;

/// Registers the employee routes. `/` and `/save_employee` answer 405 to
/// other methods; the form and view pages accept any method.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(employee::list_employees))
            .default_service(web::to(get_only)),
    )
    .service(web::resource("/add_employee").route(web::route().to(employee::add_employee)))
    .service(
        web::resource("/save_employee")
            .route(web::post().to(employee::save_employee))
            .default_service(web::to(post_only)),
    )
    .service(web::resource("/view_employee").route(web::route().to(employee::view_employee)));
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("404 page not found".to_string()))
}

async fn get_only() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed("GET requests only".to_string()))
}

async fn post_only() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed("only POST allowed".to_string()))
}
