//! Network address generator.
//!
//! [`IpNetGenerator`] walks every address of a CIDR block in order, network and
//! broadcast addresses included, keeping only the next address and a count of
//! what is left.

use crate::error::{ParseError, Result};
use crate::models::{AddressBytes, AddressFamily};
use ipnet::IpNet;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use serde::de;
use serde::{Deserialize, Deserializer};
use std::iter::FusedIterator;
use std::net::IpAddr;
use std::str::FromStr;

/// Stateful generator over the addresses of one network.
///
/// Yields [`IpAddr`] values through [`Iterator`]. Each value is an independent
/// copy; advancing the generator never changes an address already handed out.
#[derive(Debug, Clone)]
pub struct IpNetGenerator {
    family: AddressFamily,
    network: IpNet,
    current: AddressBytes,
    remaining: BigUint,
}

impl IpNetGenerator {
    /// Create a generator from a CIDR string (e.g. "192.168.100.0/24").
    ///
    /// A bare address without a prefix length is rejected, as is any
    /// surrounding whitespace. Host bits are masked off, so "10.10.10.245/25"
    /// starts at 10.10.10.128.
    ///
    /// # Examples
    /// ```
    /// use ipnetgen::IpNetGenerator;
    /// let mut gen = IpNetGenerator::new("192.168.100.0/30").unwrap();
    /// assert_eq!(gen.next().unwrap().to_string(), "192.168.100.0");
    /// assert_eq!(gen.count(), 3);
    /// assert!(IpNetGenerator::new("192.168.100.10").is_err());
    /// ```
    pub fn new(cidr: &str) -> Result<IpNetGenerator> {
        let network: IpNet = cidr.parse().map_err(|source| ParseError::InvalidCidr {
            input: cidr.to_string(),
            source,
        })?;
        Ok(Self::from_net(network))
    }

    /// Create a generator from an already parsed network.
    pub fn from_net(network: IpNet) -> IpNetGenerator {
        let network = network.trunc();
        let current = AddressBytes::from(network.network());
        let family = current.family();
        let host_bits = usize::from(family.bits() - network.prefix_len());
        let remaining = BigUint::one() << host_bits;

        log::debug!("New generator for {network} ({family}), {remaining} addresses");

        IpNetGenerator {
            family,
            network,
            current,
            remaining,
        }
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// The masked network being enumerated.
    pub fn network(&self) -> IpNet {
        self.network
    }

    /// Number of addresses not yet returned by [`Iterator::next`].
    pub fn remaining(&self) -> &BigUint {
        &self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_zero()
    }

    /// The address the next call to [`Iterator::next`] will return, without
    /// advancing.
    pub fn peek(&self) -> Option<IpAddr> {
        if self.is_exhausted() {
            None
        } else {
            Some(self.current.to_ip())
        }
    }
}

impl Iterator for IpNetGenerator {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        // remaining is authoritative: current wraps to zero after the top address
        if self.is_exhausted() {
            return None;
        }

        let addr = self.current.to_ip();
        self.current.advance();
        self.remaining -= 1u32;

        log::trace!("next({}) = {addr}", self.network);
        if self.remaining.is_zero() {
            log::debug!("Generator for {} exhausted", self.network);
        }
        Some(addr)
    }

    /// Exact while the count fits in `usize`. Larger networks (e.g. a `/64`)
    /// report `(usize::MAX, None)`, so `count()` on them would overflow.
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for IpNetGenerator {}

impl FromStr for IpNetGenerator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        IpNetGenerator::new(s)
    }
}

impl TryFrom<&str> for IpNetGenerator {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        IpNetGenerator::new(s)
    }
}

impl From<IpNet> for IpNetGenerator {
    fn from(network: IpNet) -> Self {
        IpNetGenerator::from_net(network)
    }
}

impl<'de> Deserialize<'de> for IpNetGenerator {
    fn deserialize<D>(deserializer: D) -> std::result::Result<IpNetGenerator, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpNetGenerator::new(&s).map_err(de::Error::custom)
    }
}
