//! Query string extractor that reports malformed queries through the envelope.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

pub struct EnvelopeQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for EnvelopeQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(EnvelopeQuery(params))
    }
}
