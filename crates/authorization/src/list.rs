//! Authorization list as carried by EIP-7702 (type 4) transactions.
//!
//! Each entry is `rlp([chain_id, address, nonce, y_parity, r, s])`.

use crate::{Authorization, AuthorizationSignature, RecoveredAuthorization, SignedAuthorization};
use alloy_rlp::{BufMut, Decodable, Encodable, Header};
use primitives::{Address, B256, U256};

/// Encodes signed authorizations as an RLP list. Claimed signer addresses are dropped.
pub fn encode_authorization_list(list: &[SignedAuthorization], out: &mut dyn BufMut) {
    alloy_rlp::encode_list::<_, SignedAuthorization>(list, out)
}

/// Decodes an RLP authorization list and recovers the authority of every entry.
///
/// Entries whose signature does not recover are kept with no authority.
pub fn decode_authorization_list(buf: &mut &[u8]) -> alloy_rlp::Result<Vec<RecoveredAuthorization>> {
    let list = Vec::<RecoveredAuthorization>::decode(buf)?;
    tracing::debug!(
        target: "auth7702::authorization",
        len = list.len(),
        recovered = list.iter().filter(|auth| auth.authority().is_some()).count(),
        "decoded authorization list"
    );
    Ok(list)
}

fn payload_length(inner: &Authorization, signature: &AuthorizationSignature) -> usize {
    inner.chain_id().length()
        + inner.contract_address().length()
        + inner.nonce().length()
        + signature.y_parity().length()
        + U256::from_be_bytes(signature.r().0).length()
        + U256::from_be_bytes(signature.s().0).length()
}

pub(crate) fn encoded_length(inner: &Authorization, signature: &AuthorizationSignature) -> usize {
    let payload_length = payload_length(inner, signature);
    payload_length + alloy_rlp::length_of_length(payload_length)
}

pub(crate) fn encode_fields(
    inner: &Authorization,
    signature: &AuthorizationSignature,
    out: &mut dyn BufMut,
) {
    Header {
        list: true,
        payload_length: payload_length(inner, signature),
    }
    .encode(out);
    inner.chain_id().encode(out);
    inner.contract_address().encode(out);
    inner.nonce().encode(out);
    signature.y_parity().encode(out);
    U256::from_be_bytes(signature.r().0).encode(out);
    U256::from_be_bytes(signature.s().0).encode(out);
}

pub(crate) fn decode_fields(
    buf: &mut &[u8],
) -> alloy_rlp::Result<(Authorization, AuthorizationSignature)> {
    let header = Header::decode(buf)?;
    if !header.list {
        return Err(alloy_rlp::Error::UnexpectedString);
    }
    let started_len = buf.len();
    if started_len < header.payload_length {
        return Err(alloy_rlp::Error::InputTooShort);
    }

    let chain_id = u64::decode(buf)?;
    let contract_address = Address::decode(buf)?;
    let nonce = u64::decode(buf)?;
    let y_parity = u8::decode(buf)?;
    let r = U256::decode(buf)?;
    let s = U256::decode(buf)?;

    let consumed = started_len - buf.len();
    if consumed != header.payload_length {
        return Err(alloy_rlp::Error::ListLengthMismatch {
            expected: header.payload_length,
            got: consumed,
        });
    }

    Ok((
        Authorization::new(chain_id, contract_address, nonce),
        AuthorizationSignature::new(B256::from(r), B256::from(s), y_parity),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{address, b256, hex};

    const SIGNER: Address = address!("0xa94f5374fce5edbc8e2a8697c15331677e6ebf0b");

    fn signed(y_parity: u8) -> SignedAuthorization {
        Authorization::new(11155111, address!("0x40e03c561eCC97aA2A44C2A1453fFBF4305CccC7"), 5)
            .into_signed(
                AuthorizationSignature::new(
                    b256!("0xbb50e2d89a4ed70663d080659fe0ad4b9bc3e06c17a227433966cb59ceee020d"),
                    b256!("0x4a8089ea57d36042c0a68300caedbdc4abaa9310ec2c490825b47fe85454a27d"),
                    y_parity,
                ),
                SIGNER,
            )
    }

    #[test]
    fn list_keeps_unrecoverable_entries() {
        let (inner, signature, _) = signed(0).into_parts();
        let list = [
            signed(0),
            signed(3),
            inner.with_nonce(6).into_signed(signature, SIGNER),
        ];
        let mut out = Vec::new();
        encode_authorization_list(&list, &mut out);

        let decoded = decode_authorization_list(&mut out.as_slice()).unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0].authority(), Some(SIGNER));
        // y_parity 3 survives decoding but cannot be recovered
        assert_eq!(decoded[1].signature().y_parity(), 3);
        assert_eq!(decoded[1].authority(), None);
        // different nonce, so the signature belongs to someone else
        assert!(decoded[2].authority().is_some());
        assert_ne!(decoded[2].authority(), Some(SIGNER));
    }

    #[test]
    fn list_wire_encoding() {
        let mut out = Vec::new();
        encode_authorization_list(&[signed(0)], &mut out);
        assert_eq!(
            hex::encode(&out),
            concat!(
                "f85f",
                "f85d83aa36a79440e03c561ecc97aa2a44c2a1453ffbf4305cccc70580",
                "a0bb50e2d89a4ed70663d080659fe0ad4b9bc3e06c17a227433966cb59ceee020d",
                "a04a8089ea57d36042c0a68300caedbdc4abaa9310ec2c490825b47fe85454a27d",
            )
        );

        let mut empty = Vec::new();
        encode_authorization_list(&[], &mut empty);
        assert_eq!(empty, [0xc0]);
    }

    #[test]
    fn rejects_string_header() {
        let mut buf: &[u8] = &hex!("83aa36a7");
        assert_eq!(decode_fields(&mut buf), Err(alloy_rlp::Error::UnexpectedString));
    }

    #[test]
    fn rejects_extra_field() {
        let mut encoded = alloy_rlp::encode(signed(0));
        // bump list length and append an extra item
        encoded[1] += 1;
        encoded.push(0x01);
        assert!(matches!(
            decode_fields(&mut encoded.as_slice()),
            Err(alloy_rlp::Error::ListLengthMismatch { .. })
        ));
    }

    #[test]
    fn rejects_truncated() {
        let encoded = alloy_rlp::encode(signed(0));
        let mut buf = &encoded[..encoded.len() - 1];
        assert!(decode_fields(&mut buf).is_err());
    }
}
