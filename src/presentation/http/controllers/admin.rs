// src/presentation/http/controllers/admin.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, response::Html};

pub async fn metrics(Extension(state): Extension<HttpState>) -> Html<String> {
    let hits = state.hits.load();
    Html(format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {hits} times!</p>\n  </body>\n</html>\n"
    ))
}

/// Development-only wipe of the hit counter and every account.
pub async fn reset(Extension(state): Extension<HttpState>) -> HttpResult<&'static str> {
    if !state.platform.is_dev() {
        return Err(HttpError::from_error(ApplicationError::forbidden(
            "reset is only available on the dev platform",
        )));
    }

    state.hits.reset();
    state
        .services
        .user_commands
        .delete_all_users()
        .await
        .into_http()?;

    Ok("Hits reset to 0")
}
