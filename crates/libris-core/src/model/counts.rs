use serde::{Deserialize, Serialize};

/// Row counts for each catalog table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCounts {
    pub authors: u64,
    pub books: u64,
    pub libraries: u64,
    pub librarians: u64,
}

impl CatalogCounts {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.authors == 0 && self.books == 0 && self.libraries == 0 && self.librarians == 0
    }
}
