use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("invalid email format: {candidate}")]
    InvalidFormat { candidate: String },
}

pub type Result<T> = std::result::Result<T, EmailError>;
