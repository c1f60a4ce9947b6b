use core::str::FromStr;

use dcbor::prelude::*;

use crate::bytewords::{self, Style};
use crate::Error;

/// `ur:<type>/<bytewords(cbor-bytes)>` — a URI-safe typed CBOR wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct UR {
    ur_type: String,
    cbor: CBOR,
}

fn is_valid_type(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl UR {
    pub fn new(ur_type: impl Into<String>, cbor: impl Into<CBOR>) -> crate::Result<Self> {
        let ur_type = ur_type.into();
        if !is_valid_type(&ur_type) {
            return Err(Error::InvalidType(ur_type));
        }
        Ok(Self { ur_type, cbor: cbor.into() })
    }

    pub fn ur_type(&self) -> &str {
        &self.ur_type
    }

    pub fn cbor(&self) -> &CBOR {
        &self.cbor
    }

    pub fn into_cbor(self) -> CBOR {
        self.cbor
    }

    fn to_string_styled(&self, style: Style) -> String {
        let data = self.cbor.to_cbor_data();
        format!("ur:{}/{}", self.ur_type, bytewords::encode(&data, style))
    }

    /// `ur:<type>/<bytewords>`, using the full-word (`Standard`) style.
    pub fn string(&self) -> String {
        self.to_string_styled(Style::Standard)
    }

    /// `ur:<type>/<bytewords>`, using the compact two-letter-per-byte
    /// (`Minimal`) style.
    pub fn minimal_string(&self) -> String {
        self.to_string_styled(Style::Minimal)
    }

    fn parse_styled(s: &str, style: Style) -> crate::Result<Self> {
        let rest = s.strip_prefix("ur:").ok_or(Error::MissingScheme)?;
        let (ur_type, body) = rest.split_once('/').ok_or_else(|| Error::InvalidType(rest.to_string()))?;
        if !is_valid_type(ur_type) {
            return Err(Error::InvalidType(ur_type.to_string()));
        }
        let data = bytewords::decode(body, style)?;
        let cbor = CBOR::from_data(&data)?;
        Ok(Self { ur_type: ur_type.to_string(), cbor })
    }

    pub fn from_string(s: &str) -> crate::Result<Self> {
        Self::parse_styled(s, Style::Standard).or_else(|_| Self::parse_styled(s, Style::Minimal))
    }
}

impl core::fmt::Display for UR {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.string())
    }
}

impl FromStr for UR {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::from_string(s)
    }
}
