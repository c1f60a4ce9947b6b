import_stdlib!();

use crate::{
    varint::{EncodeVarInt, MajorType},
    ByteString, Error, Map, Result, Simple, Tag,
};

/// A symbolic representation of a CBOR data item.
///
/// `CBOR` is a thin wrapper around [`CBORCase`], the enum that actually holds
/// the decoded shape of the item. Most code constructs a `CBOR` by calling
/// `.into()` on a Rust value, and inspects one by calling [`CBOR::as_case`].
#[derive(Clone)]
pub struct CBOR(CBORCase);

/// The decoded shape of a CBOR data item, per the major types of RFC 8949.
#[derive(Clone)]
pub enum CBORCase {
    /// Major type 0: an unsigned integer.
    Unsigned(u64),
    /// Major type 1: a negative integer, stored as `-1 - n`.
    Negative(u64),
    /// Major type 2: a byte string.
    ByteString(ByteString),
    /// Major type 3: a UTF-8 text string.
    Text(String),
    /// Major type 4: an array of CBOR items.
    Array(Vec<CBOR>),
    /// Major type 5: a map of CBOR key/value pairs.
    Map(Map),
    /// Major type 6: a tagged CBOR item.
    Tagged(Tag, Box<CBOR>),
    /// Major type 7: a simple value (booleans, null, and floating point).
    Simple(Simple),
}

impl CBOR {
    /// Returns a reference to the underlying [`CBORCase`].
    pub fn case(&self) -> &CBORCase {
        &self.0
    }

    /// Returns a reference to the underlying [`CBORCase`].
    ///
    /// Alias of [`CBOR::case`] used at call sites that read more naturally
    /// when pattern-matching a borrowed value.
    pub fn as_case(&self) -> &CBORCase {
        &self.0
    }

    /// Consumes this `CBOR` and returns the underlying [`CBORCase`].
    pub fn into_case(self) -> CBORCase {
        self.0
    }

    /// Creates a tagged CBOR value wrapping `item` with `tag`.
    pub fn tagged_value(tag: impl Into<Tag>, item: impl Into<CBOR>) -> CBOR {
        CBORCase::Tagged(tag.into(), Box::new(item.into())).into()
    }

    /// The CBOR simple value `false`.
    pub fn r#false() -> CBOR {
        CBORCase::Simple(Simple::False).into()
    }

    /// The CBOR simple value `true`.
    pub fn r#true() -> CBOR {
        CBORCase::Simple(Simple::True).into()
    }

    /// The CBOR simple value `null`.
    pub fn null() -> CBOR {
        CBORCase::Simple(Simple::Null).into()
    }

    /// Returns `true` if this value is the CBOR simple value `null`.
    pub fn is_null(&self) -> bool {
        matches!(self.as_case(), CBORCase::Simple(Simple::Null))
    }

    /// Encodes this CBOR value to its deterministic binary representation.
    pub fn to_cbor_data(&self) -> Vec<u8> {
        match self.as_case() {
            CBORCase::Unsigned(n) => n.encode_varint(MajorType::Unsigned),
            CBORCase::Negative(n) => n.encode_varint(MajorType::Negative),
            CBORCase::ByteString(b) => {
                let mut data = b.len().encode_varint(MajorType::ByteString);
                data.extend_from_slice(b.as_ref());
                data
            }
            CBORCase::Text(s) => {
                let mut data = s.len().encode_varint(MajorType::Text);
                data.extend_from_slice(s.as_bytes());
                data
            }
            CBORCase::Array(items) => {
                let mut data = items.len().encode_varint(MajorType::Array);
                for item in items {
                    data.extend(item.to_cbor_data());
                }
                data
            }
            CBORCase::Map(map) => {
                let mut data = map.len().encode_varint(MajorType::Map);
                for (key, value) in map.iter() {
                    data.extend(key.to_cbor_data());
                    data.extend(value.to_cbor_data());
                }
                data
            }
            CBORCase::Tagged(tag, item) => {
                let mut data = tag.value().encode_varint(MajorType::Tagged);
                data.extend(item.to_cbor_data());
                data
            }
            CBORCase::Simple(simple) => simple.cbor_data(),
        }
    }

    /// Decodes a CBOR value from its deterministic binary representation.
    ///
    /// Returns an error if `data` is not well-formed deterministic CBOR, or if
    /// there is unused data past the end of the decoded item.
    pub fn from_data(data: impl AsRef<[u8]>) -> Result<Self> {
        crate::decode::decode_cbor(data)
    }

    /// Decodes a CBOR value from a hexadecimal string.
    ///
    /// Panics if `hex` is not valid hex or does not decode to well-formed
    /// CBOR. Prefer [`CBOR::try_from_hex`] outside of tests.
    pub fn from_hex(hex: impl AsRef<str>) -> Self {
        Self::try_from_hex(hex).unwrap()
    }

    /// Decodes a CBOR value from a hexadecimal string.
    pub fn try_from_hex(hex: impl AsRef<str>) -> Result<Self> {
        let data = hex::decode(hex.as_ref()).map_err(|_| Error::Custom("invalid hex".into()))?;
        Self::from_data(data)
    }
}

impl From<CBORCase> for CBOR {
    fn from(case: CBORCase) -> Self {
        CBOR(case)
    }
}

impl PartialEq for CBOR {
    fn eq(&self, other: &Self) -> bool {
        self.to_cbor_data() == other.to_cbor_data()
    }
}

impl Eq for CBOR {}

impl PartialOrd for CBOR {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CBOR {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.to_cbor_data().cmp(&other.to_cbor_data())
    }
}

impl hash::Hash for CBOR {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.to_cbor_data().hash(state)
    }
}

impl fmt::Debug for CBOR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_case() {
            CBORCase::Unsigned(n) => write!(f, "unsigned({})", n),
            CBORCase::Negative(n) => write!(f, "negative({})", -1 - (*n as i128)),
            CBORCase::ByteString(b) => write!(f, "bytes({})", hex::encode(b.as_ref())),
            CBORCase::Text(s) => write!(f, "text({:?})", s),
            CBORCase::Array(items) => {
                write!(f, "array([{}])", items.iter().map(|x| format!("{:?}", x)).collect::<Vec<_>>().join(", "))
            }
            CBORCase::Map(map) => {
                write!(f, "map({:?})", map)
            }
            CBORCase::Tagged(tag, item) => write!(f, "tagged({}, {:?})", tag.value(), item),
            CBORCase::Simple(simple) => write!(f, "simple({})", simple),
        }
    }
}

impl fmt::Display for CBOR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_case() {
            CBORCase::Unsigned(n) => write!(f, "{}", n),
            CBORCase::Negative(n) => write!(f, "{}", -1 - (*n as i128)),
            CBORCase::ByteString(b) => write!(f, "h'{}'", hex::encode(b.as_ref())),
            CBORCase::Text(s) => write!(f, "{:?}", s),
            CBORCase::Array(items) => {
                write!(f, "[{}]", items.iter().map(|x| format!("{}", x)).collect::<Vec<_>>().join(", "))
            }
            CBORCase::Map(map) => {
                let pairs: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            CBORCase::Tagged(tag, item) => write!(f, "{}({})", tag.value(), item),
            CBORCase::Simple(simple) => write!(f, "{}", simple),
        }
    }
}
