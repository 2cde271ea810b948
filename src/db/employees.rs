use serde::{Deserialize, Serialize};
use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};

use crate::errors::AppError;
use crate::models::employee::Employee;

pub const COLLECTION: &str = "employees";

/// Persisted shape; the driver id type stays behind this module.
#[derive(Deserialize, Debug)]
struct EmployeeRecord {
    id: RecordId,
    name: String,
    salary: f64,
    age: f64,
}

#[derive(Serialize, Debug)]
struct EmployeeContent {
    name: String,
    salary: f64,
    age: f64,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Employee {
            id: record.id.key().to_string(),
            name: record.name,
            salary: record.salary,
            age: record.age,
        }
    }
}

impl From<&Employee> for EmployeeContent {
    fn from(employee: &Employee) -> Self {
        EmployeeContent {
            name: employee.name.clone(),
            salary: employee.salary,
            age: employee.age,
        }
    }
}

/// Store-generated keys are ASCII alphanumeric; anything else is rejected
/// here, before any database access.
pub fn parse_id(id: &str) -> Result<RecordId, AppError> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::BadRequest(format!("invalid employee id: {}", id)));
    }
    Ok(RecordId::from_table_key(COLLECTION, id))
}

pub async fn find_all(db: &Surreal<Any>) -> Result<Vec<Employee>, AppError> {
    let records: Vec<EmployeeRecord> = db.select(COLLECTION).await?;
    Ok(records.into_iter().map(Employee::from).collect())
}

pub async fn create(db: &Surreal<Any>, employee: &Employee) -> Result<Employee, AppError> {
    // Client-supplied ids are discarded; the store assigns the record key
    let inserted: Option<EmployeeRecord> = db
        .create(COLLECTION)
        .content(EmployeeContent::from(employee))
        .await?;
    let inserted = inserted
        .ok_or_else(|| AppError::DatabaseError("insert returned no record".to_string()))?;

    // Re-read by the generated id so the caller gets the stored document as-is
    let stored: Option<EmployeeRecord> = db.select(inserted.id.clone()).await?;
    let stored = stored.ok_or_else(|| {
        AppError::DatabaseError(format!("inserted record {} not found", inserted.id))
    })?;
    Ok(Employee::from(stored))
}

pub async fn update(
    db: &Surreal<Any>,
    id: &str,
    employee: &Employee,
) -> Result<Option<Employee>, AppError> {
    let record_id = parse_id(id)?;
    // Merge touches name/salary/age only; the id field never changes
    let updated: Option<EmployeeRecord> = db
        .update(record_id)
        .merge(EmployeeContent::from(employee))
        .await?;
    Ok(updated.map(Employee::from))
}

pub async fn delete(db: &Surreal<Any>, id: &str) -> Result<Option<Employee>, AppError> {
    let record_id = parse_id(id)?;
    let deleted: Option<EmployeeRecord> = db.delete(record_id).await?;
    Ok(deleted.map(Employee::from))
}
