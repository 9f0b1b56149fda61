use thiserror::Error;

use crate::number::Domain;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumberError {
    #[error("'{raw}' is not a valid {domain} value")]
    Invalid { raw: String, domain: Domain },
    #[error("'{0}' is not a finite number")]
    NonFinite(String),
}
