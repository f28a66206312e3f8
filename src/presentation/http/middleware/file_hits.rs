// src/presentation/http/middleware/file_hits.rs
use crate::presentation::http::metrics::HitCounter;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

pub async fn count_file_hits(
    State(hits): State<Arc<HitCounter>>,
    request: Request,
    next: Next,
) -> Response {
    let hit = hits.increment();
    tracing::debug!(hit, path = %request.uri().path(), "static file hit");
    next.run(request).await
}
