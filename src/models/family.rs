//! Address family of a network.

use std::fmt;

/// IPv4 or IPv6, fixed for the lifetime of a generator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Width of an address in bytes (4 or 16).
    pub fn width(self) -> usize {
        match self {
            AddressFamily::V4 => 4,
            AddressFamily::V6 => 16,
        }
    }

    /// Width of an address in bits (32 or 128).
    pub fn bits(self) -> u8 {
        match self {
            AddressFamily::V4 => 32,
            AddressFamily::V6 => 128,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(AddressFamily::V4.width(), 4);
        assert_eq!(AddressFamily::V6.width(), 16);
        assert_eq!(AddressFamily::V4.bits(), 32);
        assert_eq!(AddressFamily::V6.bits(), 128);
    }

    #[test]
    fn test_display() {
        assert_eq!(AddressFamily::V4.to_string(), "IPv4");
        assert_eq!(AddressFamily::V6.to_string(), "IPv6");
    }
}
