use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::LibraryId;

/// A library. Holds books by association only; it does not own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub id: LibraryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Library {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: LibraryId::new(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
