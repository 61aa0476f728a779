use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::collections::HashMap;
use std::convert::Infallible;

/// an extractor that internally uses `axum::extract::Query` but never rejects
///
/// A query string that fails to deserialize is logged and treated as empty, so
/// the handler sees it the same way as a request without parameters.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(pub HashMap<String, String>);

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<HashMap<String, String>>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            // Lossy decoding means a string map never rejects today; kept for axum upgrades.
            Err(rejection) => {
                tracing::warn!("Unparsable query string {:?}: {}", parts.uri.query(), rejection);
                Ok(Self::default())
            }
        }
    }
}
