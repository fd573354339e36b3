pub mod author;
pub mod book;
pub mod counts;
pub mod ids;
pub mod librarian;
pub mod library;

pub use author::Author;
pub use book::{Book, ShelvedBook};
pub use counts::CatalogCounts;
pub use ids::{AuthorId, BookId, LibrarianId, LibraryId};
pub use librarian::Librarian;
pub use library::Library;
