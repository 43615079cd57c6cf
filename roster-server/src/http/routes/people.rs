//! Person endpoints
//!
//! People are addressed by full name in the path, e.g.
//! `/api/person/Ada%20Lovelace`.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{CompletePerson, PersonFilter, PersonRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{PersonPath, ValidJson};
use crate::http::server::AppState;
use crate::models::{Age, CourseSet, NewPerson, PersonKind, PersonName, ValidationError};
use super::MessageResponse;

/// Create/update person request. Missing fields deserialize to empty
/// values and are rejected by `validate`.
#[derive(Deserialize)]
pub struct PersonRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub courses: Option<Vec<i64>>,
}

impl PersonRequest {
    pub fn validate(self) -> Result<NewPerson, ValidationError> {
        Ok(NewPerson {
            first_name: PersonName::new("first_name", &self.first_name)?,
            last_name: PersonName::new("last_name", &self.last_name)?,
            kind: self.kind.parse()?,
            age: Age::new(self.age)?,
            courses: CourseSet::from(self.courses.unwrap_or_default()),
        })
    }
}

/// Listing filters
#[derive(Deserialize)]
pub struct PersonQueryParams {
    pub name: Option<String>,
    pub age: Option<String>,
}

/// Person response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "type")]
    pub kind: PersonKind,
    pub age: i32,
    pub courses: Vec<i64>,
}

impl From<CompletePerson> for PersonResponse {
    fn from(p: CompletePerson) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            kind: p.kind,
            age: p.age,
            courses: p.courses,
        }
    }
}

/// Id of a newly created person
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// GET /api/person?name=&age=
async fn list_people(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PersonQueryParams>,
) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    let filter = PersonFilter::parse(params.name.as_deref(), params.age.as_deref())?;
    let people = PersonRepo::new(&state.pool).list(&filter).await?;
    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

/// POST /api/person
async fn create_person(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<PersonRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let person = req.validate()?;
    let id = PersonRepo::new(&state.pool).create(&person).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/person/{name}
async fn get_person(
    State(state): State<Arc<AppState>>,
    PersonPath(full_name): PersonPath,
) -> Result<Json<PersonResponse>, ApiError> {
    let person = PersonRepo::new(&state.pool).get(&full_name).await?;
    Ok(Json(PersonResponse::from(person)))
}

/// PUT /api/person/{name}
async fn update_person(
    State(state): State<Arc<AppState>>,
    PersonPath(full_name): PersonPath,
    ValidJson(req): ValidJson<PersonRequest>,
) -> Result<Json<PersonResponse>, ApiError> {
    let person = req.validate()?;
    let updated = PersonRepo::new(&state.pool)
        .update(&full_name, &person)
        .await?;
    Ok(Json(PersonResponse::from(updated)))
}

/// DELETE /api/person/{name}
async fn delete_person(
    State(state): State<Arc<AppState>>,
    PersonPath(full_name): PersonPath,
) -> Result<Json<MessageResponse>, ApiError> {
    PersonRepo::new(&state.pool).delete(&full_name).await?;
    Ok(Json(MessageResponse::new("person deleted")))
}

/// Person routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/person", get(list_people).post(create_person))
        .route(
            "/api/person/{name}",
            get(get_person).put(update_person).delete(delete_person),
        )
}
