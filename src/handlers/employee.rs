use actix_web::{web, HttpResponse};
use log::info;

use crate::errors::AppError;
use crate::models::employee::{EmployeeUpdate, NewEmployee};
use crate::store::EmployeeStore;

pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json("Welcome to Employee Management System")
}

pub async fn get_employees(
    store: web::Data<EmployeeStore>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Get employees called");
    let employees = store.list_all()?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Returns the record or `null`; a missing id is not an error here.
pub async fn get_employee(
    store: web::Data<EmployeeStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Get employee by id called");
    let employee = store.get_by_id(&id.into_inner())?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    store: web::Data<EmployeeStore>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Create employee called");
    let created = store.create(new_employee.into_inner())?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_employee(
    store: web::Data<EmployeeStore>,
    id: web::Path<String>,
    updates: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Update employee called");
    let id = id.into_inner();
    match store.update_by_id(&id, updates.into_inner())? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(AppError::NotFound(format!("no employee with id {}", id)).into()),
    }
}

pub async fn delete_employee(
    store: web::Data<EmployeeStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = id.into_inner();
    match store.delete_by_id(&id)? {
        Some(employee) => {
            info!("Employee deleted successfully");
            Ok(HttpResponse::Ok().json(employee))
        }
        None => Err(AppError::NotFound(format!("no employee with id {}", id)).into()),
    }
}

pub async fn get_employees_by_department(
    store: web::Data<EmployeeStore>,
    name: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Get employees by department called");
    let employees = store.by_department(&name.into_inner())?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employees_by_designation(
    store: web::Data<EmployeeStore>,
    name: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Get employees by designation called");
    let employees = store.by_designation(&name.into_inner())?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employees_by_skill(
    store: web::Data<EmployeeStore>,
    skill: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Get employees by skill called");
    let employees = store.by_skill(&skill.into_inner())?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employees_by_status(
    store: web::Data<EmployeeStore>,
    status: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Filter employees by status called");
    let employees = store.by_status(&status.into_inner())?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employees_by_salary_range(
    store: web::Data<EmployeeStore>,
    range: web::Path<(f64, f64)>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Filter employees by salary range called");
    let (min, max) = range.into_inner();
    let employees = store.by_salary_range(min, max)?;
    Ok(HttpResponse::Ok().json(employees))
}
