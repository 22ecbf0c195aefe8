//! JSON body extractor that reports malformed bodies through the envelope.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a body that fails to parse becomes a 400 Fail
/// envelope. Field-level validation is left to the caller.
pub struct EnvelopeJson<T>(pub T);

impl<T, S> FromRequest<S> for EnvelopeJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(EnvelopeJson(data))
    }
}
