// src/domain/post/mod.rs
pub mod entity;
pub mod repository;
pub mod sanitizer;
pub mod value_objects;

pub use entity::{NewPost, Post};
pub use repository::{PostListFilter, PostReadRepository, PostWriteRepository, SortOrder};
pub use sanitizer::ContentSanitizer;
pub use value_objects::{PostBody, PostId};
