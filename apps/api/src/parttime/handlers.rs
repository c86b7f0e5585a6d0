//! Axum route handlers for the part-time API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::posting::PartTimePostingRow;
use crate::parttime::contact::{parse_contact, validate_contact, ContactInfo};
use crate::parttime::posting::{prepare_posting, PostingInput};
use crate::parttime::requirements::{
    parse_gender_requirement, validate_requirements, GenderRequirement,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseContactRequest {
    #[serde(default)]
    pub contact: String,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequirementsRequest {
    pub requirements: Option<String>,
}

/// POST /parttime/parse-contact
pub async fn handle_parse_contact(
    payload: Result<Json<ParseContactRequest>, JsonRejection>,
) -> Result<Json<ContactInfo>, AppError> {
    let Json(req) = payload?;
    validate_contact(&req.contact)?;
    Ok(Json(parse_contact(&req.contact)))
}

/// POST /parttime/parse-requirements
pub async fn handle_parse_requirements(
    payload: Result<Json<ParseRequirementsRequest>, JsonRejection>,
) -> Result<Json<GenderRequirement>, AppError> {
    let Json(req) = payload?;
    let requirements = req.requirements.as_deref();
    validate_requirements(requirements)?;
    Ok(Json(parse_gender_requirement(requirements)))
}

/// POST /parttime
pub async fn handle_create_posting(
    State(state): State<AppState>,
    payload: Result<Json<PostingInput>, JsonRejection>,
) -> Result<(StatusCode, Json<PartTimePostingRow>), AppError> {
    let Json(input) = payload?;
    let record = prepare_posting(input)?;
    let row = state.postings.create(record).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /parttime
pub async fn handle_list_postings(
    State(state): State<AppState>,
) -> Result<Json<Vec<PartTimePostingRow>>, AppError> {
    Ok(Json(state.postings.list().await?))
}

/// GET /parttime/:id
pub async fn handle_get_posting(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PartTimePostingRow>, AppError> {
    let row = state
        .postings
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Posting {id} not found")))?;
    Ok(Json(row))
}

/// PUT /parttime/:id
pub async fn handle_update_posting(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PostingInput>, JsonRejection>,
) -> Result<Json<PartTimePostingRow>, AppError> {
    let Json(input) = payload?;
    let record = prepare_posting(input)?;
    let row = state
        .postings
        .update(id, record)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Posting {id} not found")))?;
    Ok(Json(row))
}

/// DELETE /parttime/:id
pub async fn handle_delete_posting(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.postings.delete(id).await? {
        return Err(AppError::NotFound(format!("Posting {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
