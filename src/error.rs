use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Unknown currency code: '{code}'")]
    UnknownCurrency { code: String },

    #[error("Unknown document type: '{value}' (expected one of {expected})")]
    UnknownDocumentType { value: String, expected: String },

    #[error("Unknown rate interval: '{value}' in item '{item}'")]
    UnknownInterval { value: String, item: String },

    #[error("The {field} name is required")]
    MissingName { field: &'static str },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Item '{item}' needs at least a service, units and a rate")]
    MalformedItem { item: String },

    #[error("Delimiter must be a single character, got '{value}'")]
    InvalidDelimiter { value: String },

    #[error("Detail '{detail}' was given before any item")]
    DetailWithoutItem { detail: String },

    #[error("No dates found to convert {from} to {to}")]
    NoConversionDates { from: String, to: String },

    #[error("The {field} is too large to compute")]
    Overflow { field: &'static str },
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("No exchange rate API key configured")]
    MissingApiKey,

    #[error("Exchange rate request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Exchange rate service returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Error decoding exchange rates: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid exchange rate response: {reason}")]
    InvalidResponse { reason: String },

    #[error("No exchange rates returned for {from} to {to}")]
    NoRates { from: String, to: String },

    #[error("Converting {amount} {from} to {to} on {date} overflowed")]
    Overflow {
        amount: Decimal,
        from: String,
        to: String,
        date: NaiveDate,
    },

    #[error("No {from} to {to} exchange rate for {date}")]
    MissingRate {
        from: String,
        to: String,
        date: NaiveDate,
    },
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    #[error("{source}")]
    Conversion {
        #[from]
        source: ConversionError,
    },
}
