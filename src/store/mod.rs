use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};

/// Fixed, non-overlapping salary brackets used by the salary report. Each
/// bracket is half-open: lower bound inclusive, upper bound exclusive, the
/// last one unbounded above.
const SALARY_BRACKETS: [(f64, f64); 6] = [
    (0.0, 20_000.0),
    (20_000.0, 40_000.0),
    (40_000.0, 60_000.0),
    (60_000.0, 80_000.0),
    (80_000.0, 100_000.0),
    (100_000.0, f64::INFINITY),
];

/// JSON-file-backed employee store. Every operation loads the whole
/// collection fresh from disk; mutating operations rewrite the whole file.
/// A process-wide mutex serializes the load-mutate-write cycle so two
/// requests in the same process cannot lose each other's writes.
pub struct EmployeeStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl EmployeeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn acquire(&self) -> Result<MutexGuard<'_, ()>, AppError> {
        self.lock
            .lock()
            .map_err(|_| AppError::Storage("store lock poisoned".to_string()))
    }

    /// Reads the full collection. A missing or empty file is an empty
    /// collection, never an error.
    fn load(&self) -> Result<Vec<Employee>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|err| AppError::Storage(format!("reading {}: {}", self.path.display(), err)))?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw)
            .map_err(|err| AppError::Storage(format!("parsing {}: {}", self.path.display(), err)))
    }

    /// Overwrites the file with the full collection.
    fn save(&self, employees: &[Employee]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| {
                    AppError::Storage(format!("creating {}: {}", parent.display(), err))
                })?;
            }
        }
        let raw = serde_json::to_string_pretty(employees)
            .map_err(|err| AppError::Storage(format!("serializing collection: {}", err)))?;
        fs::write(&self.path, raw)
            .map_err(|err| AppError::Storage(format!("writing {}: {}", self.path.display(), err)))
    }

    fn snapshot(&self) -> Result<Vec<Employee>, AppError> {
        let _guard = self.acquire()?;
        self.load()
    }

    /// All records in insertion order as persisted.
    pub fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        self.snapshot()
    }

    /// First record with the given id, if any.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        Ok(self.snapshot()?.into_iter().find(|e| e.id == id))
    }

    /// Validates the supplied fields, assigns a fresh id and creation
    /// timestamps, appends the record and persists the collection.
    pub fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        new_employee.validate()?;

        let now = Utc::now();
        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            name: new_employee.name,
            gender: new_employee.gender,
            status: new_employee.status,
            email: new_employee.email,
            address: new_employee.address,
            phone: new_employee.phone,
            designation: new_employee.designation,
            department: new_employee.department,
            salary: new_employee.salary,
            skills: new_employee.skills,
            created_date: now.date_naive(),
            created_time: now.time(),
        };

        let _guard = self.acquire()?;
        let mut employees = self.load()?;
        employees.push(employee.clone());
        self.save(&employees)?;
        Ok(employee)
    }

    /// Validates the supplied fields, merges them into the matching record,
    /// re-validates the merged result and persists. `Ok(None)` when no
    /// record has the id; nothing is written in that case.
    pub fn update_by_id(
        &self,
        id: &str,
        updates: EmployeeUpdate,
    ) -> Result<Option<Employee>, AppError> {
        updates.validate()?;

        let _guard = self.acquire()?;
        let mut employees = self.load()?;
        let index = match employees.iter().position(|e| e.id == id) {
            Some(index) => index,
            None => return Ok(None),
        };

        let mut merged = employees[index].clone();
        merged.apply_update(updates);
        merged.validate()?;

        employees[index] = merged.clone();
        self.save(&employees)?;
        Ok(Some(merged))
    }

    /// Removes and returns the matching record. `Ok(None)` when no record
    /// has the id; nothing is written in that case.
    pub fn delete_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let _guard = self.acquire()?;
        let mut employees = self.load()?;
        let index = match employees.iter().position(|e| e.id == id) {
            Some(index) => index,
            None => return Ok(None),
        };

        let removed = employees.remove(index);
        self.save(&employees)?;
        Ok(Some(removed))
    }

    pub fn by_department(&self, department: &str) -> Result<Vec<Employee>, AppError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .filter(|e| e.department == department)
            .collect())
    }

    pub fn by_designation(&self, designation: &str) -> Result<Vec<Employee>, AppError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .filter(|e| e.designation == designation)
            .collect())
    }

    /// Records listing `skill` as one of their skills, exact element match,
    /// case-sensitive.
    pub fn by_skill(&self, skill: &str) -> Result<Vec<Employee>, AppError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .filter(|e| e.skills.iter().any(|s| s == skill))
            .collect())
    }

    /// Records whose status literal equals `status`. An unknown status
    /// matches nothing.
    pub fn by_status(&self, status: &str) -> Result<Vec<Employee>, AppError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .filter(|e| e.status.as_str() == status)
            .collect())
    }

    /// Records with `min <= salary <= max`, both bounds inclusive.
    pub fn by_salary_range(&self, min: f64, max: f64) -> Result<Vec<Employee>, AppError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .filter(|e| min <= e.salary && e.salary <= max)
            .collect())
    }

    /// Employee count per department.
    pub fn report_by_department(&self) -> Result<BTreeMap<String, u64>, AppError> {
        let mut counts = BTreeMap::new();
        for employee in self.snapshot()? {
            *counts.entry(employee.department).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Employee count per skill; an employee is counted once per skill it
    /// lists.
    pub fn report_by_skill(&self) -> Result<BTreeMap<String, u64>, AppError> {
        let mut counts = BTreeMap::new();
        for employee in self.snapshot()? {
            for skill in employee.skills {
                *counts.entry(skill).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    /// Employee count per salary bracket. Each employee falls into the first
    /// bracket whose lower bound <= salary < upper bound; a salary matching
    /// no bracket is omitted.
    pub fn report_by_salary_bracket(&self) -> Result<BTreeMap<String, u64>, AppError> {
        let mut counts = BTreeMap::new();
        for employee in self.snapshot()? {
            for (low, high) in SALARY_BRACKETS {
                if low <= employee.salary && employee.salary < high {
                    *counts.entry(bracket_label(low, high)).or_insert(0) += 1;
                    break;
                }
            }
        }
        Ok(counts)
    }
}

fn bracket_label(low: f64, high: f64) -> String {
    if high.is_infinite() {
        format!("{}-inf", low as u64)
    } else {
        format!("{}-{}", low as u64, high as u64)
    }
}
