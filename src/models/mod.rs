//! Address data types used by the generator.
//!
//! - [`AddressFamily`] - IPv4 or IPv6
//! - [`AddressBytes`] - fixed-width octet buffer for one address

mod address;
mod family;

// Re-export public types
pub use address::AddressBytes;
pub use family::AddressFamily;
