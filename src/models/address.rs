//! Fixed-width address buffer.

use super::AddressFamily;
use crate::increment::increment;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Octets of one address, 4 bytes for IPv4 and 16 for IPv6.
///
/// The variant is chosen once from the network and never changes, so the
/// buffer width is fixed for its whole life.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressBytes {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl AddressBytes {
    pub fn family(&self) -> AddressFamily {
        match self {
            AddressBytes::V4(_) => AddressFamily::V4,
            AddressBytes::V6(_) => AddressFamily::V6,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        match self {
            AddressBytes::V4(octets) => octets.as_slice(),
            AddressBytes::V6(octets) => octets.as_slice(),
        }
    }

    /// Advance to the next address, wrapping to zero past the top.
    pub fn advance(&mut self) {
        match self {
            AddressBytes::V4(octets) => increment(octets),
            AddressBytes::V6(octets) => increment(octets),
        }
    }

    /// Copy the buffer out as a std address value.
    pub fn to_ip(&self) -> IpAddr {
        match *self {
            AddressBytes::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
            AddressBytes::V6(octets) => IpAddr::V6(Ipv6Addr::from(octets)),
        }
    }
}

impl From<IpAddr> for AddressBytes {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => AddressBytes::V4(v4.octets()),
            IpAddr::V6(v6) => AddressBytes::V6(v6.octets()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ip_keeps_width() {
        let v4 = AddressBytes::from("192.168.1.7".parse::<IpAddr>().unwrap());
        assert_eq!(v4.family(), AddressFamily::V4);
        assert_eq!(v4.as_slice(), &[192, 168, 1, 7]);

        let v6 = AddressBytes::from("fe80::1".parse::<IpAddr>().unwrap());
        assert_eq!(v6.family(), AddressFamily::V6);
        assert_eq!(v6.as_slice().len(), 16);
    }

    #[test]
    fn test_advance() {
        let mut bytes = AddressBytes::from("fe80::ffff:ffff".parse::<IpAddr>().unwrap());
        bytes.advance();
        assert_eq!(bytes.to_ip().to_string(), "fe80::1:0:0");
        assert_eq!(bytes.family(), AddressFamily::V6);
    }

    #[test]
    fn test_to_ip_is_a_copy() {
        let mut bytes = AddressBytes::V4([10, 0, 0, 1]);
        let before = bytes.to_ip();
        bytes.advance();
        assert_eq!(before.to_string(), "10.0.0.1");
        assert_eq!(bytes.to_ip().to_string(), "10.0.0.2");
    }
}
