use thiserror::Error;

#[derive(Error, Debug)]
pub enum NiagaError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("malformed QRIS template: {0}")]
    Template(String),
    #[error("invalid amount: {0}")]
    Amount(String),
    #[error("malformed EMV payload: {0}")]
    Payload(String),
    #[error("order error: {0}")]
    Order(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NiagaError>;
