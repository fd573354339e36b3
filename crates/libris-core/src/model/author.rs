use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::AuthorId;

/// A book author. Owns zero or more books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Author {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AuthorId::new(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
