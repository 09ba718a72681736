mod errors;
mod handlers;
mod models;
mod store;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;

use store::EmployeeStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let data_path =
        env::var("EMP_DATA_PATH").unwrap_or_else(|_| "data/employees.json".to_string());
    let bind_addr = env::var("EMP_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let store = web::Data::new(EmployeeStore::new(data_path));

    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .service(web::resource("/").route(web::get().to(handlers::employee::root)))
            .service(
                web::resource("/employees").route(web::get().to(handlers::employee::get_employees)),
            )
            .service(
                web::resource("/employees/{id}")
                    .route(web::get().to(handlers::employee::get_employee)),
            )
            .service(
                web::resource("/create_employee")
                    .route(web::post().to(handlers::employee::create_employee)),
            )
            .service(
                web::resource("/update_employee/{id}")
                    .route(web::put().to(handlers::employee::update_employee)),
            )
            .service(
                web::resource("/delete_employee/{id}")
                    .route(web::delete().to(handlers::employee::delete_employee)),
            )
            .service(
                web::resource("/department/{name}")
                    .route(web::get().to(handlers::employee::get_employees_by_department)),
            )
            .service(
                web::resource("/designation/{name}")
                    .route(web::get().to(handlers::employee::get_employees_by_designation)),
            )
            .service(
                web::resource("/skill/{skill}")
                    .route(web::get().to(handlers::employee::get_employees_by_skill)),
            )
            .service(
                web::resource("/status/{status}")
                    .route(web::get().to(handlers::employee::get_employees_by_status)),
            )
            .service(
                web::resource("/salary/{min}/{max}")
                    .route(web::get().to(handlers::employee::get_employees_by_salary_range)),
            )
            .service(
                web::resource("/department_report")
                    .route(web::get().to(handlers::report::department_report)),
            )
            .service(
                web::resource("/salary_report")
                    .route(web::get().to(handlers::report::salary_report)),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
