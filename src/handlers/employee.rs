use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};
use url::form_urlencoded;

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::state::AppState;
use crate::templates::{
    render, AddEmployeePage, ErrorPage, HomePage, ViewEmployeePage, INVALID_EMPLOYEE_NUMBER,
    NO_EMPLOYEE_NUMBER,
};

/// First value of `name` in a urlencoded byte string.
fn first_value(encoded: &[u8], name: &str) -> Option<String> {
    form_urlencoded::parse(encoded)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Looks a field up in the posted body first, then in the query string.
/// Absent fields read as empty.
fn form_value(req: &HttpRequest, body: &[u8], name: &str) -> String {
    first_value(body, name)
        .or_else(|| first_value(req.query_string().as_bytes(), name))
        .unwrap_or_default()
}

pub async fn list_employees(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let employees = state.store.list_all().await?;

    Ok(render(&HomePage { employees: &employees }))
}

pub async fn add_employee() -> HttpResponse {
    render(&AddEmployeePage)
}

// Fields are stored exactly as submitted, empty strings included.
pub async fn save_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let employee = Employee::new(
        form_value(&req, &body, "empnumb"),
        form_value(&req, &body, "fname"),
        form_value(&req, &body, "lname"),
    );

    state.store.save(&employee).await?;
    info!("Saved employee '{}'", employee.employee_number);

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish())
}

/// Shows one employee, reading through the cache.
///
/// Only a confirmed hit is served from the cache. A miss or a cache failure
/// goes to the store, and the newest record with that number wins.
pub async fn view_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let number = match first_value(req.query_string().as_bytes(), "empnumb") {
        Some(number) if !number.is_empty() => number,
        _ => return Ok(render(&ErrorPage { message: NO_EMPLOYEE_NUMBER })),
    };
    let number = number.as_str();

    match state.cache.get(number).await {
        Ok(Some(employee)) => return Ok(render(&ViewEmployeePage { employee: &employee })),
        Ok(None) => {}
        Err(err) => warn!("cache lookup for '{}' failed, reading store: {}", number, err),
    }

    let employees = state.store.find_by_number(number).await?;
    let Some(employee) = employees.first() else {
        return Ok(render(&ErrorPage { message: INVALID_EMPLOYEE_NUMBER }));
    };

    if let Err(err) = state.cache.set(number, employee).await {
        warn!("cache write for '{}' failed: {}", number, err);
    }

    Ok(render(&ViewEmployeePage { employee }))
}
