// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::{
        post::{PostListFilter, SortOrder},
        user::UserId,
    },
};

#[derive(Debug, Default)]
pub struct ListPostsQuery {
    pub author_id: Option<String>,
    pub sort: Option<String>,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let author_id = query
            .author_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(str::parse::<UserId>)
            .transpose()?;

        let filter = PostListFilter {
            author_id,
            order: SortOrder::parse_lenient(query.sort.as_deref()),
        };

        let posts = self.read_repo.list(filter).await?;
        Ok(posts.into_iter().map(PostDto::from).collect())
    }
}
