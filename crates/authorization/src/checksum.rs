//! Serde helpers writing addresses in their EIP-55 checksum form.
//!
//! Use with `#[serde(serialize_with = "...")]`. Reading accepts any casing.

use primitives::Address;
use serde::Serializer;

/// Serializes an address as a checksummed `0x` string.
pub fn serialize<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&address.to_checksum(None))
}

/// Serializes an optional address as a checksummed `0x` string or `null`.
pub fn serialize_option<S: Serializer>(
    address: &Option<Address>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match address {
        Some(address) => serializer.serialize_some(&address.to_checksum(None)),
        None => serializer.serialize_none(),
    }
}
