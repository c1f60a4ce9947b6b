use crate::{varint::{EncodeVarInt, MajorType}, CBOR, CBORCase, Error, Result, Simple};
use half::f16;

static CBOR_NAN: [u8; 3] = [0xf9, 0x7e, 0x00];

/// Reduces `n` to the smallest CBOR representation that round-trips exactly:
/// an integer if `n` has no fractional part, else a 16-, 32-, or 64-bit float.
pub(crate) fn reduce_f64(n: f64) -> CBOR {
    if n < 0.0 {
        let i = n as i64;
        if i as f64 == n {
            return i.into();
        }
    }
    let i = n as u64;
    if i as f64 == n {
        return i.into();
    }
    CBORCase::Simple(Simple::Float(n)).into()
}

/// Encodes `n` to its deterministic binary representation, choosing the
/// narrowest numeric encoding that round-trips exactly.
pub(crate) fn encode_canonical_f64(n: f64) -> Vec<u8> {
    let f = n as f32;
    if f as f64 == n {
        return encode_canonical_f32(f);
    }
    if n < 0.0 {
        let i = n as i64;
        if i as f64 == n {
            return CBOR::from(i).to_cbor_data();
        }
    }
    let i = n as u64;
    if i as f64 == n {
        return CBOR::from(i).to_cbor_data();
    }
    if n.is_nan() {
        return CBOR_NAN.to_vec();
    }
    n.to_bits().encode_varint(MajorType::Simple)
}

fn encode_canonical_f32(n: f32) -> Vec<u8> {
    let f = f16::from_f32(n);
    if f.to_f32() == n {
        return encode_canonical_f16(f);
    }
    if n < 0.0 {
        let i = n as i32;
        if i as f32 == n {
            return CBOR::from(i).to_cbor_data();
        }
    }
    let i = n as u32;
    if i as f32 == n {
        return CBOR::from(i).to_cbor_data();
    }
    if n.is_nan() {
        return CBOR_NAN.to_vec();
    }
    n.to_bits().encode_varint(MajorType::Simple)
}

fn encode_canonical_f16(n: f16) -> Vec<u8> {
    let f = n.to_f64();
    if f < 0.0 {
        let i = f as i16;
        if i as f64 == f {
            return CBOR::from(i).to_cbor_data();
        }
    }
    let i = f as u16;
    if i as f64 == f {
        return CBOR::from(i).to_cbor_data();
    }
    if n.is_nan() {
        return CBOR_NAN.to_vec();
    }
    n.to_bits().encode_varint(MajorType::Simple)
}

impl From<f64> for CBOR {
    fn from(value: f64) -> Self {
        reduce_f64(value)
    }
}

impl TryFrom<CBOR> for f64 {
    type Error = Error;

    fn try_from(cbor: CBOR) -> Result<Self> {
        match cbor.into_case() {
            CBORCase::Unsigned(n) => {
                let f = n as f64;
                if f as u64 == n { Ok(f) } else { Err(Error::OutOfRange) }
            }
            CBORCase::Negative(n) => {
                let value = -1i128 - n as i128;
                let f = value as f64;
                if f as i128 == value { Ok(f) } else { Err(Error::OutOfRange) }
            }
            CBORCase::Simple(Simple::Float(n)) => Ok(n),
            _ => Err(Error::WrongType),
        }
    }
}

impl From<f32> for CBOR {
    fn from(value: f32) -> Self {
        reduce_f64(value as f64)
    }
}

impl TryFrom<CBOR> for f32 {
    type Error = Error;

    fn try_from(cbor: CBOR) -> Result<Self> {
        let n: f64 = cbor.try_into()?;
        let f = n as f32;
        if f as f64 == n { Ok(f) } else { Err(Error::OutOfRange) }
    }
}

impl From<f16> for CBOR {
    fn from(value: f16) -> Self {
        reduce_f64(value.to_f64())
    }
}

impl TryFrom<CBOR> for f16 {
    type Error = Error;

    fn try_from(cbor: CBOR) -> Result<Self> {
        let n: f64 = cbor.try_into()?;
        let f = f16::from_f64(n);
        if f.to_f64() == n { Ok(f) } else { Err(Error::OutOfRange) }
    }
}

pub(crate) fn validate_canonical_f64(n: f64) -> Result<()> {
    if n == n as f32 as f64 || n == n as i64 as f64 || n.is_nan() {
        return Err(Error::NonCanonicalNumeric);
    }
    Ok(())
}

pub(crate) fn validate_canonical_f32(n: f32) -> Result<()> {
    if n == f16::from_f32(n).to_f32() || n == n as i32 as f32 || n.is_nan() {
        return Err(Error::NonCanonicalNumeric);
    }
    Ok(())
}

pub(crate) fn validate_canonical_f16(n: f16) -> Result<()> {
    let f = n.to_f64();
    if f == f as i64 as f64 || (n.is_nan() && n.to_bits() != 0x7e00) {
        return Err(Error::NonCanonicalNumeric);
    }
    Ok(())
}
