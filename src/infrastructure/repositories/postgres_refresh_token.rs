// src/infrastructure/repositories/postgres_refresh_token.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::session::{NewRefreshToken, RefreshToken, RefreshTokenRepository, RefreshTokenValue};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresRefreshTokenRepository {
    pool: PgPool,
}

impl PostgresRefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RefreshTokenRow {
    token: String,
    user_id: Uuid,
    expires_at: DateTime<Utc>,
    revoked_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<RefreshTokenRow> for RefreshToken {
    fn from(row: RefreshTokenRow) -> Self {
        RefreshToken {
            token: RefreshTokenValue::new(row.token),
            user_id: UserId::from(row.user_id),
            expires_at: row.expires_at,
            revoked_at: row.revoked_at,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl RefreshTokenRepository for PostgresRefreshTokenRepository {
    async fn insert(&self, token: NewRefreshToken) -> DomainResult<RefreshToken> {
        let NewRefreshToken {
            token,
            user_id,
            expires_at,
            created_at,
        } = token;

        let row = sqlx::query_as::<_, RefreshTokenRow>(
            "INSERT INTO refresh_tokens (token, user_id, expires_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING token, user_id, expires_at, revoked_at, created_at",
        )
        .bind(token.as_str())
        .bind(user_id.as_uuid())
        .bind(expires_at)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn find_by_token(&self, token: &str) -> DomainResult<Option<RefreshToken>> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            "SELECT token, user_id, expires_at, revoked_at, created_at
             FROM refresh_tokens WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(RefreshToken::from))
    }

    async fn revoke(&self, token: &str, revoked_at: DateTime<Utc>) -> DomainResult<bool> {
        // Conditional update so concurrent revokes agree on a single winner.
        let result = sqlx::query(
            "UPDATE refresh_tokens SET revoked_at = $2, updated_at = $2
             WHERE token = $1 AND revoked_at IS NULL",
        )
        .bind(token)
        .bind(revoked_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
