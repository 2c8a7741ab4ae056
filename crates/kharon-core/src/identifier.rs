//! Twelve-byte document identifiers written as 24 hexadecimal digits

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building an [`ObjectId`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("identifier must be 24 hexadecimal digits, found {length} characters")]
    InvalidLength { length: usize },

    #[error("invalid hexadecimal digit '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// A 12-byte identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Parse the 24-hex-digit form, in either case
    pub fn parse_str(s: &str) -> Result<Self, IdentifierError> {
        if s.len() != 24 {
            return Err(IdentifierError::InvalidLength {
                length: s.chars().count(),
            });
        }

        let mut bytes = [0u8; 12];
        let digits = s.as_bytes();
        for (i, byte) in bytes.iter_mut().enumerate() {
            let high = hex_value(digits[2 * i], 2 * i, s)?;
            let low = hex_value(digits[2 * i + 1], 2 * i + 1, s)?;
            *byte = (high << 4) | low;
        }
        Ok(Self(bytes))
    }

    /// Lowercase 24-hex-digit form
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

fn hex_value(digit: u8, position: usize, source: &str) -> Result<u8, IdentifierError> {
    (digit as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| IdentifierError::InvalidCharacter {
            character: source
                .get(position..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            position,
        })
}

impl FromStr for ObjectId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
