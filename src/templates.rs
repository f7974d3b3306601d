//! Page templates, compiled into the binary and shared by all requests.

use actix_web::HttpResponse;
use askama::Template;
use log::error;

use crate::models::employee::Employee;

pub const NO_EMPLOYEE_NUMBER: &str = "No Employee Number added in query";
pub const INVALID_EMPLOYEE_NUMBER: &str = "Invalid Employee Number added in query";

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage<'a> {
    pub employees: &'a [Employee],
}

#[derive(Template)]
#[template(path = "add_employee.html")]
pub struct AddEmployeePage;

#[derive(Template)]
#[template(path = "view_employee.html")]
pub struct ViewEmployeePage<'a> {
    pub employee: &'a Employee,
}

#[derive(Template)]
#[template(path = "custom_error.html")]
pub struct ErrorPage<'a> {
    pub message: &'a str,
}

/// Renders `page` as a 200 HTML response.
///
/// A render failure is only logged; the client gets an empty page.
pub fn render<T: Template>(page: &T) -> HttpResponse {
    let mut response = HttpResponse::Ok();
    response.content_type("text/html; charset=utf-8");

    match page.render() {
        Ok(body) => response.body(body),
        Err(err) => {
            error!("template render failed: {}", err);
            response.finish()
        }
    }
}
