//! Iterate over every address in an IPv4 or IPv6 network.
//!
//! ```
//! use ipnetgen::IpNetGenerator;
//!
//! let gen = IpNetGenerator::new("192.168.100.0/24").expect("valid CIDR");
//! for ip in gen {
//!     // do something with ip
//!     assert!(ip.is_ipv4());
//! }
//! ```
//!
//! Addresses are produced one at a time, so even a `/64` can be walked
//! without building a list. The remaining count is arbitrary precision and
//! holds the 2^128 addresses of `::/0`.

mod error;
mod generator;
mod increment;
pub mod models;

pub use error::{ParseError, Result};
pub use generator::IpNetGenerator;
pub use increment::{increment, increment_ip};
pub use models::AddressFamily;
