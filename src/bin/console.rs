//! Interactive console client for the employee management server. A menu
//! loop on stdin; every choice issues one HTTP request and prints the JSON
//! response.

use std::env;
use std::io::{self, Write};

use awc::Client;
use dotenv::dotenv;
use serde_json::{json, Map, Value};
use url::Url;

fn prompt(label: &str) -> String {
    print!("{}", label);
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
    line.trim().to_string()
}

/// Base URL plus extra path segments, percent-encoded.
fn endpoint(base: &Url, segments: &[&str]) -> Option<Url> {
    let mut url = base.clone();
    url.path_segments_mut().ok()?.extend(segments);
    Some(url)
}

async fn get(client: &Client, url: Url) -> Option<Value> {
    let mut response = client.get(url.as_str()).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json::<Value>().await.ok()
}

async fn post(client: &Client, url: Url, payload: &Value) -> Option<Value> {
    let mut response = client.post(url.as_str()).send_json(payload).await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json::<Value>().await.ok()
}

async fn put(client: &Client, url: Url, payload: &Value) -> Option<Value> {
    let mut response = client.put(url.as_str()).send_json(payload).await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json::<Value>().await.ok()
}

async fn delete(client: &Client, url: Url) -> Option<Value> {
    let mut response = client.delete(url.as_str()).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json::<Value>().await.ok()
}

fn print_result(result: Option<Value>) {
    match result {
        Some(value) => match serde_json::to_string_pretty(&value) {
            Ok(rendered) => println!("{}", rendered),
            Err(_) => println!("{}", value),
        },
        None => println!("Something went wrong"),
    }
}

async fn add_employee(client: &Client, base: &Url) -> Option<Value> {
    let name = prompt("Enter the employee name: ");
    let gender = prompt("Enter the employee gender: ");
    let status = prompt("Enter the employee status: ");
    let email = prompt("Enter the employee email: ");
    let address = prompt("Enter the employee address: ");
    let phone = prompt("Enter the employee phone: ");
    let designation = prompt("Enter the employee designation: ");
    let department = prompt("Enter the employee department: ");
    let salary: f64 = prompt("Enter the employee salary: ").parse().ok()?;
    let skills: Vec<String> = prompt("Enter skills separated by space: ")
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let payload = json!({
        "name": name,
        "gender": gender,
        "status": status,
        "email": email,
        "address": address,
        "phone": phone,
        "designation": designation,
        "department": department,
        "salary": salary,
        "skills": skills,
    });
    post(client, endpoint(base, &["create_employee"])?, &payload).await
}

async fn edit_employee(client: &Client, base: &Url) -> Option<Value> {
    let id = prompt("Enter the employee id: ");
    let current = get(client, endpoint(base, &["employees", &id])?).await?;
    if current.is_null() {
        println!("Employee not found");
        return Some(Value::Null);
    }

    println!("Enter the new values for the fields you want to update. Leave blank for no change.");
    let mut patch = Map::new();
    for field in [
        "name",
        "gender",
        "status",
        "email",
        "address",
        "phone",
        "designation",
        "department",
    ] {
        let value = prompt(&format!("Enter the new {}: ", field));
        if !value.is_empty() {
            patch.insert(field.to_string(), Value::String(value));
        }
    }
    let salary = prompt("Enter the new salary: ");
    if !salary.is_empty() {
        patch.insert("salary".to_string(), json!(salary.parse::<f64>().ok()?));
    }
    let skills = prompt("Enter the new skills separated by space: ");
    if !skills.is_empty() {
        let skills: Vec<String> = skills.split_whitespace().map(str::to_string).collect();
        patch.insert("skills".to_string(), json!(skills));
    }

    put(
        client,
        endpoint(base, &["update_employee", &id])?,
        &Value::Object(patch),
    )
    .await
}

#[actix_web::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let base_url = env::var("EMP_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let base = match Url::parse(&base_url) {
        Ok(url) => url,
        Err(err) => {
            eprintln!("Invalid EMP_BASE_URL {}: {}", base_url, err);
            return;
        }
    };
    let client = Client::default();

    loop {
        println!("\n**************Welcome to Employee Management System**************");
        println!("1. View all Employees");
        println!("2. View Employee by id");
        println!("3. Add Employee");
        println!("4. Edit Employee");
        println!("5. Remove Employee");
        println!("6. Filter Employees by Department name");
        println!("7. Filter Employees by Designation");
        println!("8. Filter Employees by Status");
        println!("9. Filter Employees by Salary Range");
        println!("10. Generate Report salary wise");
        println!("11. Generate Report department wise");
        println!("12. Quit");

        let choice = prompt("Enter your choice: ");
        match choice.as_str() {
            "1" => {
                let result = match endpoint(&base, &["employees"]) {
                    Some(url) => get(&client, url).await,
                    None => None,
                };
                print_result(result);
            }
            "2" => {
                let id = prompt("Enter the employee id: ");
                let result = match endpoint(&base, &["employees", &id]) {
                    Some(url) => get(&client, url).await,
                    None => None,
                };
                match result {
                    Some(Value::Null) => println!("Employee not found"),
                    other => print_result(other),
                }
            }
            "3" => print_result(add_employee(&client, &base).await),
            "4" => print_result(edit_employee(&client, &base).await),
            "5" => {
                let id = prompt("Enter the employee id: ");
                let result = match endpoint(&base, &["delete_employee", &id]) {
                    Some(url) => delete(&client, url).await,
                    None => None,
                };
                print_result(result);
            }
            "6" => {
                let name = prompt("Enter the department name to filter by: ");
                let result = match endpoint(&base, &["department", &name]) {
                    Some(url) => get(&client, url).await,
                    None => None,
                };
                print_result(result);
            }
            "7" => {
                let designation = prompt("Enter the designation to filter by: ");
                let result = match endpoint(&base, &["designation", &designation]) {
                    Some(url) => get(&client, url).await,
                    None => None,
                };
                print_result(result);
            }
            "8" => {
                let status = prompt("Enter the status to filter by: ");
                let result = match endpoint(&base, &["status", &status]) {
                    Some(url) => get(&client, url).await,
                    None => None,
                };
                print_result(result);
            }
            "9" => {
                let min = prompt("Enter the minimum salary: ");
                let max = prompt("Enter the maximum salary: ");
                if min.parse::<f64>().is_err() || max.parse::<f64>().is_err() {
                    println!("Invalid salary");
                    continue;
                }
                let result = match endpoint(&base, &["salary", &min, &max]) {
                    Some(url) => get(&client, url).await,
                    None => None,
                };
                print_result(result);
            }
            "10" => {
                let result = match endpoint(&base, &["salary_report"]) {
                    Some(url) => get(&client, url).await,
                    None => None,
                };
                print_result(result);
            }
            "11" => {
                let result = match endpoint(&base, &["department_report"]) {
                    Some(url) => get(&client, url).await,
                    None => None,
                };
                print_result(result);
            }
            "12" => break,
            _ => println!("Invalid choice"),
        }
    }
}
