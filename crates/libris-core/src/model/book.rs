use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::author::Author;
use crate::model::ids::{AuthorId, BookId};

/// A book. Always has exactly one owning author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
}

impl Book {
    #[must_use]
    pub fn new(title: impl Into<String>, author: &Author) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author_id: author.id,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// A book held by a library, with its author resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelvedBook {
    pub book: Book,
    pub author: Author,
}

impl fmt::Display for ShelvedBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.book.title, self.author.name)
    }
}
