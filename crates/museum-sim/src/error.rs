use museum_core::MuseumError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] MuseumError),

    #[error("path list length {got} does not match visitor count {expected}")]
    PathCountMismatch { expected: usize, got: usize },
}

pub type SimResult<T> = Result<T, SimError>;
