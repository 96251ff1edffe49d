use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotFound(what) => Self::NotFound(what),
            other => Self::Db(other.to_string()),
        }
    }
}
