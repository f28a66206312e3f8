// src/application/dto/posts.rs
use crate::domain::post::{Post, PostId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: PostId,
    pub body: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            body: post.body.into(),
            user_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
