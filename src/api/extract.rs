//! Custom Extractors
//!
//! Query extraction that tolerates repeated keys.

use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::{request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Query string extractor that keeps the first value of a repeated key.
///
/// `?page=1&page=2` deserializes as `?page=1` instead of being rejected
/// for a duplicate field. Target fields must deserialize from strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let mut fields = Map::new();
        for (name, value) in pairs {
            fields.entry(name).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(fields))
            .map(LenientQuery)
            .map_err(|err| {
                (
                    StatusCode::BAD_REQUEST,
                    format!("Failed to deserialize query string: {}", err),
                )
                    .into_response()
            })
    }
}
