use actix_web::{web, HttpResponse};
use log::info;

use crate::store::EmployeeStore;

pub async fn department_report(
    store: web::Data<EmployeeStore>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Department report called");
    let report = store.report_by_department()?;
    Ok(HttpResponse::Ok().json(report))
}

pub async fn salary_report(
    store: web::Data<EmployeeStore>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Salary report called");
    let report = store.report_by_salary_bracket()?;
    Ok(HttpResponse::Ok().json(report))
}
