//! Course endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Course, CourseRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{CourseId, ValidJson};
use crate::http::server::AppState;
use crate::models::CourseName;
use super::MessageResponse;

/// Create/update course request
#[derive(Deserialize)]
pub struct CourseRequest {
    #[serde(default)]
    pub name: String,
}

/// Course response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// GET /api/course
async fn list_courses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = CourseRepo::new(&state.pool).list().await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// POST /api/course
async fn create_course(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    let name = CourseName::new(&req.name)?;
    let course = CourseRepo::new(&state.pool).create(name).await?;
    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

/// GET /api/course/{id}
async fn get_course(
    State(state): State<Arc<AppState>>,
    CourseId(id): CourseId,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseRepo::new(&state.pool).get(id).await?;
    Ok(Json(CourseResponse::from(course)))
}

/// PUT /api/course/{id}
async fn update_course(
    State(state): State<Arc<AppState>>,
    CourseId(id): CourseId,
    ValidJson(req): ValidJson<CourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let name = CourseName::new(&req.name)?;
    let course = CourseRepo::new(&state.pool).update(id, name).await?;
    Ok(Json(CourseResponse::from(course)))
}

/// DELETE /api/course/{id}
async fn delete_course(
    State(state): State<Arc<AppState>>,
    CourseId(id): CourseId,
) -> Result<Json<MessageResponse>, ApiError> {
    CourseRepo::new(&state.pool).delete(id).await?;
    Ok(Json(MessageResponse::new("course deleted")))
}

/// Course routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/course", get(list_courses).post(create_course))
        .route(
            "/api/course/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
}
