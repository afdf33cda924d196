use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::address::Address;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Invalid input query parameter: to")]
    InvalidRecipient,

    /// The reason is logged, the client only sees the parameter name.
    #[error("Invalid input query parameter: amount")]
    InvalidAmount(String),

    #[error("Invalid \"account\" provided")]
    InvalidAccount,

    #[error("account may not be rent exempt: {0}")]
    BelowRentExemption(Address),

    #[error("Network unavailable, please try again later")]
    NetworkUnavailable(String),

    #[error("An unknown error occurred")]
    UnknownError,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },

    #[error("Unsupported cluster: {0}")]
    UnsupportedCluster(String),
}

// Every failure is reported to the wallet client as a plain-text 400
impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::InvalidRecipient
            | CustomError::InvalidAmount(_)
            | CustomError::InvalidAccount
            | CustomError::BelowRentExemption(_)
            | CustomError::NetworkUnavailable(_)
            | CustomError::UnknownError => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
