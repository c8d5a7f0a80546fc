use super::error::{ApiError, ApiErrorExt};
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor that rejects with [`ApiError`] instead of axum's plain-text rejection.
///
/// The body is decoded whatever its `Content-Type`; a body that cannot be read or does not
/// deserialize into `T` becomes a `400` with code `INVALID_REQUEST`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_request(rejection.body_text()))
            .context("Reading request body")?;

        let value = serde_json::from_slice(&bytes)
            .map_err(ApiError::invalid_request)
            .context("Decoding JSON body")?;

        Ok(Self(value))
    }
}
