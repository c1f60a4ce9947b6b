use crate::{CBOR, CBORCase, Error, Result};

macro_rules! impl_cbor_unsigned {
    ($type:ty) => {
        impl From<$type> for CBOR {
            fn from(value: $type) -> Self {
                CBORCase::Unsigned(value as u64).into()
            }
        }

        impl TryFrom<CBOR> for $type {
            type Error = Error;

            fn try_from(cbor: CBOR) -> Result<Self> {
                match cbor.into_case() {
                    CBORCase::Unsigned(n) => <$type>::try_from(n).map_err(|_| Error::OutOfRange),
                    CBORCase::Negative(_) => Err(Error::OutOfRange),
                    _ => Err(Error::WrongType),
                }
            }
        }
    };
}

macro_rules! impl_cbor_signed {
    ($type:ty) => {
        impl From<$type> for CBOR {
            fn from(value: $type) -> Self {
                if value < 0 {
                    let n = (-1i128 - value as i128) as u64;
                    CBORCase::Negative(n).into()
                } else {
                    CBORCase::Unsigned(value as u64).into()
                }
            }
        }

        impl TryFrom<CBOR> for $type {
            type Error = Error;

            fn try_from(cbor: CBOR) -> Result<Self> {
                match cbor.into_case() {
                    CBORCase::Unsigned(n) => <$type>::try_from(n).map_err(|_| Error::OutOfRange),
                    CBORCase::Negative(n) => {
                        let value = -1i128 - n as i128;
                        <$type>::try_from(value).map_err(|_| Error::OutOfRange)
                    }
                    _ => Err(Error::WrongType),
                }
            }
        }
    };
}

impl_cbor_unsigned!(u8);
impl_cbor_unsigned!(u16);
impl_cbor_unsigned!(u32);
impl_cbor_unsigned!(u64);
impl_cbor_unsigned!(usize);

impl_cbor_signed!(i8);
impl_cbor_signed!(i16);
impl_cbor_signed!(i32);
impl_cbor_signed!(i64);
