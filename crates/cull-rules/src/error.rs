use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
