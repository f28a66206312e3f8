// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post};
use crate::domain::post::value_objects::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// `desc` (any casing) sorts newest first; everything else is ascending.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("desc") => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PostListFilter {
    pub author_id: Option<UserId>,
    pub order: SortOrder,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn list(&self, filter: PostListFilter) -> DomainResult<Vec<Post>>;
}
