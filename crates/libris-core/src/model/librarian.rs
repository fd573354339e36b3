use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::{LibrarianId, LibraryId};
use crate::model::library::Library;

/// A librarian, assigned to exactly one library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Librarian {
    pub id: LibrarianId,
    pub name: String,
    pub library_id: LibraryId,
    pub created_at: DateTime<Utc>,
}

impl Librarian {
    #[must_use]
    pub fn new(name: impl Into<String>, library: &Library) -> Self {
        Self {
            id: LibrarianId::new(),
            name: name.into(),
            library_id: library.id,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Librarian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
