pub mod employee;
pub mod report;
