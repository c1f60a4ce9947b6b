#[cfg(feature = "num-bigint")]
pub use crate::{BigInt, BigUint, Sign};
pub use crate::{
    ByteString, CBOR, CBORCase, CBORCodable, CBORDecodable, CBOREncodable,
    CBORSortable, CBORSummarizer, CBORTagged, CBORTaggedCodable,
    CBORTaggedDecodable, CBORTaggedEncodable, Date, DiagFormatOpts,
    Error as CBORError, HexFormatOpts, Map, Result as CBORResult, Set, Tag,
    TagValue, TagsStore, TagsStoreOpt, TagsStoreTrait, cbor_tag,
    const_cbor_tag, tags_for_values,
    walk::{EdgeType, Visitor, WalkElement},
    with_tags, with_tags_mut,
};
