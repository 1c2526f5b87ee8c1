use std::{fmt, ops::Deref};

use num_bigint::BigUint;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of an address in bytes
pub const ADDRESS_LEN: usize = 20;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address is not valid base36: {0}")]
    InvalidBase36(String),

    #[error("Address does not fit in 20 bytes")]
    TooLong,
}

/// A fixed width account address, used to identify entries in a capped set
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    address: [u8; ADDRESS_LEN],
}

impl Address {
    /// Create a new random address
    pub fn new_random() -> Self {
        Address {
            address: rand::rng().random(),
        }
    }

    /// Create an address from its base36 string form
    pub fn new_from_base36(s: &str) -> Result<Self, AddressError> {
        // parse_bytes would also take a sign and '_' separators
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(AddressError::InvalidBase36(s.to_string()));
        }

        let big_int = BigUint::parse_bytes(s.as_bytes(), 36)
            .ok_or_else(|| AddressError::InvalidBase36(s.to_string()))?;
        let buf = big_int.to_bytes_be();

        if buf.len() > ADDRESS_LEN {
            return Err(AddressError::TooLong);
        }

        // Pad with zeros at the front
        let mut address = [0u8; ADDRESS_LEN];
        address[ADDRESS_LEN - buf.len()..].copy_from_slice(&buf);

        Ok(Address { address })
    }

    /// Create an address from its raw buffer
    pub const fn new_from_buf(buf: &[u8; ADDRESS_LEN]) -> Self {
        Address { address: *buf }
    }

    /// Get the raw buffer
    pub fn dump_buf(&self) -> &[u8; ADDRESS_LEN] {
        &self.address
    }

    pub fn dump_base36(&self) -> String {
        BigUint::from_bytes_be(&self.address).to_str_radix(36)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.dump_base36())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new_from_base36(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.dump_base36())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Address: {}", self.dump_base36())
    }
}

impl Deref for Address {
    type Target = [u8; ADDRESS_LEN];
    fn deref(&self) -> &Self::Target {
        &self.address
    }
}
