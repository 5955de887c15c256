//! Error types for ipnetgen

use thiserror::Error;

/// Raised when a string cannot be read as a network with a prefix length.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid CIDR '{input}': {source}")]
    InvalidCidr {
        input: String,
        source: ipnet::AddrParseError,
    },
}

/// Result type alias for ipnetgen operations
pub type Result<T> = std::result::Result<T, ParseError>;
