//! Custom Extractors

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::shared::error::Failure;

/// JSON body whose rejection is reported as a `Validation` failure, so
/// malformed input still answers with `{ "error": ... }`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
                Err(Failure::validation("Invalid request body"))
            }
        }
    }
}
