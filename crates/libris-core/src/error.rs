use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("ambiguous lookup: more than one {entity} named '{name}'")]
    Ambiguous { entity: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
