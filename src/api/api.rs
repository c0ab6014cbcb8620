use actix_web::{delete, get, post, put, web, HttpResponse, Responder, Result};
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;
use crate::models::todo::TodoInput;
use crate::repository::database::Database;

#[derive(Serialize)]
pub struct Response {
    pub message: String,
}

/// Rejected before the repository is ever called.
fn validate(input: &TodoInput) -> Result<(), ApiError> {
    if input.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text cannot be empty".to_string()));
    }
    Ok(())
}

#[post("/todos")]
pub async fn create_todo(
    db: web::Data<Database>,
    new_todo: web::Json<TodoInput>,
) -> Result<HttpResponse, ApiError> {
    let input = new_todo.into_inner();
    validate(&input)?;
    let todo = db.create_todo(input)?;
    Ok(HttpResponse::Ok().json(todo))
}

#[get("/todos")]
pub async fn get_todos(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let todos = db.get_todos()?;
    Ok(HttpResponse::Ok().json(todos))
}

#[get("/todos/{id}")]
pub async fn get_todo_by_id(
    db: web::Data<Database>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    match db.get_todo_by_id(id.into_inner())? {
        Some(todo) => Ok(HttpResponse::Ok().json(todo)),
        None => Err(ApiError::NotFound),
    }
}

#[put("/todos/{id}")]
pub async fn update_todo_by_id(
    db: web::Data<Database>,
    id: web::Path<i32>,
    updated_todo: web::Json<TodoInput>,
) -> Result<HttpResponse, ApiError> {
    let input = updated_todo.into_inner();
    validate(&input)?;
    match db.update_todo_by_id(id.into_inner(), input)? {
        Some(todo) => Ok(HttpResponse::Ok().json(todo)),
        None => Err(ApiError::NotFound),
    }
}

#[delete("/todos/{id}")]
pub async fn delete_todo_by_id(
    db: web::Data<Database>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    match db.delete_todo_by_id(id.into_inner())? {
        Some(todo) => Ok(HttpResponse::Ok().json(todo)),
        None => Err(ApiError::NotFound),
    }
}

#[get("/health")]
pub async fn healthcheck() -> impl Responder {
    let response = Response {
        message: "Everything is working fine".to_string(),
    };
    HttpResponse::Ok().json(response)
}

pub async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(json!({"detail": "Resource not found"})))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(create_todo)
        .service(get_todos)
        .service(get_todo_by_id)
        .service(update_todo_by_id)
        .service(delete_todo_by_id)
        .service(healthcheck);
}
