use crate::util::extractor::QueryParams;
use crate::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;

// Controllers hit `/verify`, but any method on any path gets the same answer.
pub fn create_routes() -> Router<AppState> {
    Router::new().fallback(verify)
}

/// Answers with one of the two fixed access bodies, always with `200 OK`.
async fn verify(
    State(state): State<AppState>,
    uri: Uri,
    QueryParams(query): QueryParams,
) -> impl IntoResponse {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let decision = state.access.check(target, &query);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        decision.body(),
    )
}
