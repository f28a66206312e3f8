// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostBody, PostId, PostListFilter, PostReadRepository, PostWriteRepository,
    SortOrder,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const CHIRP_COLUMNS: &str = "id, body, user_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ChirpRow {
    id: Uuid,
    body: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ChirpRow> for Post {
    type Error = DomainError;

    fn try_from(row: ChirpRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::from(row.id),
            body: PostBody::new(row.body)?,
            author_id: UserId::from(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            body,
            author_id,
            created_at,
        } = post;
        let body: String = body.into();

        let row = sqlx::query_as::<_, ChirpRow>(&format!(
            "INSERT INTO chirps (body, user_id, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING {CHIRP_COLUMNS}"
        ))
        .bind(body)
        .bind(author_id.as_uuid())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("chirp not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, ChirpRow>(&format!(
            "SELECT {CHIRP_COLUMNS} FROM chirps WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self, filter: PostListFilter) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(CHIRP_COLUMNS);
        builder.push(" FROM chirps");

        if let Some(author_id) = filter.author_id {
            builder.push(" WHERE user_id = ");
            builder.push_bind(author_id.as_uuid());
        }

        match filter.order {
            SortOrder::Ascending => builder.push(" ORDER BY created_at ASC, id ASC"),
            SortOrder::Descending => builder.push(" ORDER BY created_at DESC, id DESC"),
        };

        let rows = builder
            .build_query_as::<ChirpRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
