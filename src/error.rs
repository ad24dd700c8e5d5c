//! Error types for rule mining and the persistence boundary.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Bad threshold, empty transaction set handed to rule generation,
    /// or an invalid configuration value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A value does not fit the decimal column it is stored in
    #[error("Precision overflow: {field} = {value} does not fit DECIMAL(10, 8)")]
    PrecisionOverflow { field: &'static str, value: f64 },

    /// An encoded identifier or label is wider than its column
    #[error("Field too long: {field} is {len} characters, at most {max} allowed")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// The persistence collaborator failed to store a record
    #[error("Sink error: {0}")]
    Sink(String),
}
