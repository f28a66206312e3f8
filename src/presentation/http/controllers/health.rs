// src/presentation/http/controllers/health.rs
pub async fn healthz() -> &'static str {
    "OK"
}
