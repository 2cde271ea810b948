use actix_web::{web, HttpResponse};
use surrealdb::engine::any::Any;
use surrealdb::Surreal;

use crate::db::employees;
use crate::errors::AppError;
use crate::models::employee::Employee;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/employee")
            .route(web::get().to(get_employees))
            .route(web::post().to(create_employee)),
    )
    .service(
        web::resource("/employee/{id}")
            .route(web::put().to(update_employee))
            .route(web::delete().to(delete_employee)),
    );
}

pub async fn get_employees(db: web::Data<Surreal<Any>>) -> Result<HttpResponse, AppError> {
    let employees = employees::find_all(&db).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    db: web::Data<Surreal<Any>>,
    employee: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    let created = employees::create(&db, &employee).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_employee(
    db: web::Data<Surreal<Any>>,
    id: web::Path<String>,
    employee: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    match employees::update(&db, &id, &employee).await? {
        Some(mut updated) => {
            // Echo the path id so the caller sees the string form it addressed
            updated.id = id;
            Ok(HttpResponse::Ok().json(updated))
        }
        None => Err(AppError::BadRequest(format!("no employee matches id {}", id))),
    }
}

pub async fn delete_employee(
    db: web::Data<Surreal<Any>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    match employees::delete(&db, &id).await? {
        Some(_) => Ok(HttpResponse::Created().json("record deleted")),
        None => Err(AppError::NotFound(format!("employee {} not found", id))),
    }
}
