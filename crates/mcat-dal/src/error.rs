pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("{entity} with id {id} not found")]
    RecordNotFound { entity: &'static str, id: i64 },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl Error {
    pub(crate) fn not_found(entity: &'static str, id: i64) -> Self {
        Error::RecordNotFound { entity, id }
    }
}
