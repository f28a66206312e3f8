// tests/support/mocks/store.rs
use async_trait::async_trait;
use chirpy::domain::{
    errors::{DomainError, DomainResult},
    post::{
        NewPost, Post, PostId, PostListFilter, PostReadRepository, PostWriteRepository, SortOrder,
    },
    session::{NewRefreshToken, RefreshToken, RefreshTokenRepository},
    user::{Email, NewUser, User, UserId, UserRepository, UserUpdate},
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    posts: Vec<Post>,
    refresh_tokens: HashMap<String, RefreshToken>,
}

/// One in-memory database backing every repository port, with the same
/// uniqueness and cascade rules as the SQL schema.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn refresh_token(&self, token: &str) -> Option<RefreshToken> {
        self.tables.lock().unwrap().refresh_tokens.get(token).cloned()
    }

    pub fn refresh_token_count(&self) -> usize {
        self.tables.lock().unwrap().refresh_tokens.len()
    }

    /// Drop a user row but keep its posts and tokens, as if the cascade had
    /// not run yet.
    pub fn forget_user(&self, id: UserId) {
        self.tables.lock().unwrap().users.remove(&id);
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .users
            .values()
            .any(|user| user.email == new_user.email)
        {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        let user = User {
            id: UserId::new(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            is_chirpy_red: false,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .values()
            .find(|user| &user.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.tables.lock().unwrap().users.get(&id).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut tables = self.tables.lock().unwrap();
        let email_taken = update.email.as_ref().is_some_and(|email| {
            tables
                .users
                .values()
                .any(|user| user.id != update.id && &user.email == email)
        });
        if email_taken {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        let user = tables
            .users
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        if let Some(flag) = update.is_chirpy_red {
            user.is_chirpy_red = flag;
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let mut tables = self.tables.lock().unwrap();
        let removed = tables.users.len() as u64;
        *tables = Tables::default();
        Ok(removed)
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.users.contains_key(&post.author_id) {
            return Err(DomainError::NotFound("author not found".into()));
        }
        let stored = Post {
            id: PostId::from(Uuid::new_v4()),
            body: post.body,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.created_at,
        };
        tables.posts.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.posts.len();
        tables.posts.retain(|post| post.id != id);
        if tables.posts.len() == before {
            return Err(DomainError::NotFound("chirp not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.posts.iter().find(|post| post.id == id).cloned())
    }

    async fn list(&self, filter: PostListFilter) -> DomainResult<Vec<Post>> {
        let tables = self.tables.lock().unwrap();
        let mut posts: Vec<Post> = tables
            .posts
            .iter()
            .filter(|post| filter.author_id.is_none_or(|id| post.author_id == id))
            .cloned()
            .collect();
        posts.sort_by_key(|post| post.created_at);
        if filter.order == SortOrder::Descending {
            posts.reverse();
        }
        Ok(posts)
    }
}

#[async_trait]
impl RefreshTokenRepository for InMemoryStore {
    async fn insert(&self, token: NewRefreshToken) -> DomainResult<RefreshToken> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.users.contains_key(&token.user_id) {
            return Err(DomainError::NotFound("user not found".into()));
        }
        let key = token.token.as_str().to_owned();
        if tables.refresh_tokens.contains_key(&key) {
            return Err(DomainError::Conflict("refresh token already issued".into()));
        }
        let stored = RefreshToken {
            token: token.token,
            user_id: token.user_id,
            expires_at: token.expires_at,
            revoked_at: None,
            created_at: token.created_at,
        };
        tables.refresh_tokens.insert(key, stored.clone());
        Ok(stored)
    }

    async fn find_by_token(&self, token: &str) -> DomainResult<Option<RefreshToken>> {
        Ok(self.refresh_token(token))
    }

    async fn revoke(&self, token: &str, revoked_at: DateTime<Utc>) -> DomainResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        match tables.refresh_tokens.get_mut(token) {
            Some(stored) if stored.revoked_at.is_none() => {
                stored.revoked_at = Some(revoked_at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Refresh-token store where another session always revokes the token
/// between a caller's lookup and its own conditional update.
pub struct LosingRevokeStore {
    inner: std::sync::Arc<InMemoryStore>,
}

impl LosingRevokeStore {
    pub fn new(inner: std::sync::Arc<InMemoryStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RefreshTokenRepository for LosingRevokeStore {
    async fn insert(&self, token: NewRefreshToken) -> DomainResult<RefreshToken> {
        RefreshTokenRepository::insert(self.inner.as_ref(), token).await
    }

    async fn find_by_token(&self, token: &str) -> DomainResult<Option<RefreshToken>> {
        self.inner.find_by_token(token).await
    }

    async fn revoke(&self, token: &str, revoked_at: DateTime<Utc>) -> DomainResult<bool> {
        self.inner.revoke(token, revoked_at).await?;
        self.inner.revoke(token, revoked_at).await
    }
}
