// src/domain/post/sanitizer.rs
//! Length gate and profanity redaction applied to post bodies before they
//! reach the store.
//!
//! Length is measured in Unicode scalar values (`char`s), so a body of 140
//! emoji is accepted exactly like a body of 140 ASCII letters.

use crate::domain::errors::{DomainError, DomainResult};
use regex::{NoExpand, Regex, RegexBuilder};

pub const MAX_BODY_CHARS: usize = 140;
pub const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
pub const MASK: &str = "****";

#[derive(Debug, Clone)]
pub struct ContentSanitizer {
    max_chars: usize,
    patterns: Vec<Regex>,
}

impl ContentSanitizer {
    /// Build a sanitizer for an explicit word list. Words are matched as
    /// literal, case-insensitive substrings in the order given.
    pub fn with_banned_words<I, S>(words: I, max_chars: usize) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = words
            .into_iter()
            .map(|word| {
                RegexBuilder::new(&regex::escape(word.as_ref()))
                    .case_insensitive(true)
                    .build()
                    .map_err(|err| DomainError::Validation(err.to_string()))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            max_chars,
            patterns,
        })
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn sanitize(&self, body: &str) -> DomainResult<String> {
        if body.chars().count() > self.max_chars {
            return Err(DomainError::TooLong {
                max: self.max_chars,
            });
        }

        // One whole-string pass per word; earlier words are masked before later ones are searched.
        let cleaned = self
            .patterns
            .iter()
            .fold(body.to_owned(), |text, pattern| {
                pattern.replace_all(&text, NoExpand(MASK)).into_owned()
            });

        Ok(cleaned)
    }
}

impl Default for ContentSanitizer {
    fn default() -> Self {
        Self::with_banned_words(BANNED_WORDS, MAX_BODY_CHARS)
            .expect("escaped literal patterns always compile")
    }
}
