use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    Retired,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Retired => "retired",
        }
    }
}

/// A stored employee record. `id`, `created_date` and `created_time` are
/// assigned by the store on creation and never change afterwards.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    #[validate(length(min = 3, max = 50))]
    pub name: String,
    pub gender: Gender,
    pub status: Status,
    #[validate(email)]
    pub email: String,
    pub address: String,
    #[validate(custom = "validate_phone")]
    pub phone: String,
    pub designation: String,
    pub department: String,
    #[validate(custom = "validate_salary")]
    pub salary: f64,
    #[validate(length(min = 1))]
    pub skills: Vec<String>,
    pub created_date: NaiveDate,
    pub created_time: NaiveTime,
}

impl Employee {
    /// Merges the supplied fields into this record. The id and creation
    /// timestamps are not part of `EmployeeUpdate` and stay untouched.
    pub fn apply_update(&mut self, updates: EmployeeUpdate) {
        if let Some(name) = updates.name {
            self.name = name;
        }
        if let Some(gender) = updates.gender {
            self.gender = gender;
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
        if let Some(email) = updates.email {
            self.email = email;
        }
        if let Some(address) = updates.address {
            self.address = address;
        }
        if let Some(phone) = updates.phone {
            self.phone = phone;
        }
        if let Some(designation) = updates.designation {
            self.designation = designation;
        }
        if let Some(department) = updates.department {
            self.department = department;
        }
        if let Some(salary) = updates.salary {
            self.salary = salary;
        }
        if let Some(skills) = updates.skills {
            self.skills = skills;
        }
    }
}

/// Caller-supplied fields for a new record, everything except the
/// server-assigned id and creation timestamps.
#[derive(Deserialize, Validate, Debug, Clone)]
pub struct NewEmployee {
    #[validate(length(min = 3, max = 50))]
    pub name: String,
    pub gender: Gender,
    pub status: Status,
    #[validate(email)]
    pub email: String,
    pub address: String,
    #[validate(custom = "validate_phone")]
    pub phone: String,
    pub designation: String,
    pub department: String,
    #[validate(custom = "validate_salary")]
    pub salary: f64,
    #[validate(length(min = 1))]
    pub skills: Vec<String>,
}

/// Partial update payload. A stray `id` key in the request body is dropped
/// during deserialization since it is not a field here.
#[derive(Deserialize, Validate, Debug, Clone, Default)]
pub struct EmployeeUpdate {
    #[validate(length(min = 3, max = 50))]
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub status: Option<Status>,
    #[validate(email)]
    pub email: Option<String>,
    pub address: Option<String>,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    #[validate(custom = "validate_salary")]
    pub salary: Option<f64>,
    #[validate(length(min = 1))]
    pub skills: Option<Vec<String>>,
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("phone must be exactly 10 digits"));
    }
    Ok(())
}

fn validate_salary(salary: f64) -> Result<(), ValidationError> {
    if salary <= 0.0 {
        return Err(ValidationError::new("salary must be greater than zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_new_employee() -> NewEmployee {
        NewEmployee {
            name: "Alice".to_string(),
            gender: Gender::Female,
            status: Status::Active,
            email: "alice@example.com".to_string(),
            address: "123 Main Street".to_string(),
            phone: "9876543210".to_string(),
            designation: "software engineer".to_string(),
            department: "ESBU".to_string(),
            salary: 50000.0,
            skills: vec!["Communication".to_string(), "Leadership".to_string()],
        }
    }

    #[test]
    fn valid_employee_passes_validation() {
        assert!(valid_new_employee().validate().is_ok());
    }

    #[test]
    fn enum_literals_are_case_sensitive() {
        assert!(serde_json::from_value::<Gender>(json!("male")).is_ok());
        assert!(serde_json::from_value::<Gender>(json!("Male")).is_err());
        assert!(serde_json::from_value::<Status>(json!("retired")).is_ok());
        assert!(serde_json::from_value::<Status>(json!("RETIRED")).is_err());
    }

    #[test]
    fn short_phone_names_the_phone_field() {
        let mut employee = valid_new_employee();
        employee.phone = "12345".to_string();
        let err = employee.validate().unwrap_err();
        assert!(err.to_string().contains("phone"));
    }

    #[test]
    fn non_digit_phone_is_rejected() {
        let mut employee = valid_new_employee();
        employee.phone = "98765x3210".to_string();
        assert!(employee.validate().is_err());
    }

    #[test]
    fn negative_salary_names_the_salary_field() {
        let mut employee = valid_new_employee();
        employee.salary = -5.0;
        let err = employee.validate().unwrap_err();
        assert!(err.to_string().contains("salary"));
    }

    #[test]
    fn zero_salary_is_rejected() {
        let mut employee = valid_new_employee();
        employee.salary = 0.0;
        assert!(employee.validate().is_err());
    }

    #[test]
    fn name_length_bounds_are_enforced() {
        let mut employee = valid_new_employee();
        employee.name = "Al".to_string();
        assert!(employee.validate().is_err());
        employee.name = "A".repeat(51);
        assert!(employee.validate().is_err());
        employee.name = "A".repeat(50);
        assert!(employee.validate().is_ok());
    }

    #[test]
    fn empty_skills_are_rejected() {
        let mut employee = valid_new_employee();
        employee.skills = Vec::new();
        assert!(employee.validate().is_err());
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut employee = valid_new_employee();
        employee.email = "not-an-email".to_string();
        let err = employee.validate().unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn update_payload_drops_stray_id_key() {
        let updates: EmployeeUpdate =
            serde_json::from_value(json!({ "id": "intruder", "salary": 1.0 })).unwrap();
        assert_eq!(updates.salary, Some(1.0));
        assert!(updates.name.is_none());
    }

    #[test]
    fn apply_update_changes_only_supplied_fields() {
        let new_employee = valid_new_employee();
        let mut employee = Employee {
            id: "emp-1".to_string(),
            name: new_employee.name.clone(),
            gender: new_employee.gender,
            status: new_employee.status,
            email: new_employee.email.clone(),
            address: new_employee.address.clone(),
            phone: new_employee.phone.clone(),
            designation: new_employee.designation.clone(),
            department: new_employee.department.clone(),
            salary: new_employee.salary,
            skills: new_employee.skills.clone(),
            created_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            created_time: chrono::NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        };

        employee.apply_update(EmployeeUpdate {
            salary: Some(99999.0),
            ..EmployeeUpdate::default()
        });

        assert_eq!(employee.salary, 99999.0);
        assert_eq!(employee.id, "emp-1");
        assert_eq!(employee.name, new_employee.name);
        assert_eq!(employee.skills, new_employee.skills);
    }
}
