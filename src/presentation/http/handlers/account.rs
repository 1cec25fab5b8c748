//! Account Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::{CredentialsRequest, ResetSecretRequest};
use crate::domain::SafeAccount;
use crate::presentation::http::JsonBody;
use crate::shared::error::Failure;
use crate::startup::AppState;

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CredentialsRequest>,
) -> Result<Json<SafeAccount>, Failure> {
    let account = state.accounts.create_account(body.into()).await?;
    Ok(Json(account))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CredentialsRequest>,
) -> Result<Json<SafeAccount>, Failure> {
    let account = state.accounts.authenticate(body.into()).await?;
    Ok(Json(account))
}

/// PATCH /resetPassword
pub async fn reset_password(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ResetSecretRequest>,
) -> Result<Json<SafeAccount>, Failure> {
    let (handle, update) = body.into_parts();
    let account = state.accounts.update_account(&handle, update).await?;
    Ok(Json(account))
}

/// GET /getUser/{handle}
pub async fn get_user(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<SafeAccount>, Failure> {
    let account = state.accounts.fetch_by_handle(&handle).await?;
    Ok(Json(account))
}

/// DELETE /deleteUser/{handle}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<SafeAccount>, Failure> {
    let account = state.accounts.delete_account(&handle).await?;
    Ok(Json(account))
}
