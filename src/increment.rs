//! Big-endian address increment.
//!
//! Provides [`increment`] for raw octet buffers and [`increment_ip`] for std
//! [`IpAddr`] values.

use std::net::IpAddr;

/// Add one to a big-endian unsigned integer stored in `addr`, in place.
///
/// The carry moves from the last byte toward index 0. A buffer of all `0xFF`
/// wraps to all zeros.
///
/// # Examples
/// ```
/// use ipnetgen::increment;
/// let mut addr = [192, 168, 100, 255];
/// increment(&mut addr);
/// assert_eq!(addr, [192, 168, 101, 0]);
/// ```
pub fn increment(addr: &mut [u8]) {
    for byte in addr.iter_mut().rev() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            break;
        }
    }
}

/// Increment an [`IpAddr`] in place, keeping its family.
pub fn increment_ip(addr: &mut IpAddr) {
    *addr = match *addr {
        IpAddr::V4(v4) => {
            let mut octets = v4.octets();
            increment(&mut octets);
            IpAddr::from(octets)
        }
        IpAddr::V6(v6) => {
            let mut octets = v6.octets();
            increment(&mut octets);
            IpAddr::from(octets)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const IP_TABLE: [(&str, &str); 8] = [
        ("192.168.100.1", "192.168.100.2"),
        ("0.0.0.0", "0.0.0.1"),
        ("192.168.100.255", "192.168.101.0"),
        ("10.10.255.255", "10.11.0.0"),
        ("10.255.255.255", "11.0.0.0"),
        ("::1", "::2"),
        ("fe80::ffff", "fe80::1:0"),
        ("fe80::ffff:ffff", "fe80::1:0:0"),
    ];

    #[test]
    fn test_increment_ip_table() {
        for (input, expected) in IP_TABLE {
            let mut ip: IpAddr = input
                .parse()
                .unwrap_or_else(|e| panic!("Bad IP address in table {input}: {e}"));
            increment_ip(&mut ip);
            assert_eq!(ip.to_string(), expected, "increment of {input}");
        }
    }

    #[test]
    fn test_increment_carry_all_bytes() {
        let mut addr = [10, 255, 255, 255];
        increment(&mut addr);
        assert_eq!(addr, [11, 0, 0, 0]);
    }

    #[test]
    fn test_increment_wraps_to_zero() {
        let mut v4 = [0xFF; 4];
        increment(&mut v4);
        assert_eq!(v4, [0; 4]);

        let mut v6 = [0xFF; 16];
        increment(&mut v6);
        assert_eq!(v6, [0; 16]);
    }

    #[test]
    fn test_increment_empty() {
        let mut empty: [u8; 0] = [];
        increment(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_increment_ip_keeps_family() {
        let mut ip: IpAddr = "255.255.255.255".parse().unwrap();
        increment_ip(&mut ip);
        assert!(ip.is_ipv4());
        assert_eq!(ip.to_string(), "0.0.0.0");

        let mut ip: IpAddr = "::".parse().unwrap();
        increment_ip(&mut ip);
        assert!(ip.is_ipv6());
        assert_eq!(ip.to_string(), "::1");
    }
}
