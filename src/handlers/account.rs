//! Account handlers: list, read, create, delete.

use crate::entity::{Entity, Id};
use crate::error::{AppError, StoreError};
use crate::model::Account;
use crate::response::message;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

fn parse_id(id_str: &str) -> Result<Id, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.accounts.list_all().await?;
    Ok(Json(accounts))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Account>, AppError> {
    let id = parse_id(&id_str)?;
    let account = state.accounts.get_by_id(id).await?;
    Ok(Json(account))
}

/// The JSON extractor rejects malformed bodies before the store is reached.
pub async fn create(
    State(state): State<AppState>,
    Json(mut body): Json<Account>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    body.id = None;
    let account = state.accounts.create(body).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !state.accounts.delete_by_id(id).await? {
        return Err(StoreError::NotFound { kind: Account::KIND, id }.into());
    }
    Ok(message(StatusCode::OK, format!("{} deleted", Account::KIND)))
}
