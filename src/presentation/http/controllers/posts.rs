// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand},
    dto::PostDto,
    queries::posts::{GetPostByIdQuery, ListPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListPostsParams {
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    state
        .services
        .post_commands
        .create_post(&actor, CreatePostCommand { body: payload.body })
        .await
        .into_http()
        .map(|post| (StatusCode::CREATED, Json(post)))
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListPostsParams>,
) -> HttpResult<Json<Vec<PostDto>>> {
    let query = ListPostsQuery {
        author_id: params.author_id,
        sort: params.sort,
    };

    state
        .services
        .post_queries
        .list_posts(query)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(&actor, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
