//! ECDSA signature over an authorization hash.

use crate::RecoveryError;
use crypto::constants::RECOVERABLE_SIGNATURE_LENGTH;
use primitives::{Address, B256, B512, LEGACY_V_OFFSET, SECP256K1N_HALF, U256};

/// `r`, `s` and `y_parity` of an authorization signature.
///
/// `y_parity` is kept as received so signatures coming from outside can be represented and
/// rejected during recovery. Signatures made by this workspace always have `y_parity` 0 or 1
/// and a low `s`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "serde_repr::SignatureRepr", into = "serde_repr::SignatureRepr")
)]
pub struct AuthorizationSignature {
    r: B256,
    s: B256,
    y_parity: u8,
}

impl AuthorizationSignature {
    /// Creates a signature from its components without validating them.
    pub const fn new(r: B256, s: B256, y_parity: u8) -> Self {
        Self { r, s, y_parity }
    }

    /// Splits a 64 byte `r || s` signature.
    pub fn from_rs_and_parity(rs: &B512, y_parity: u8) -> Self {
        Self {
            r: B256::from_slice(&rs[..32]),
            s: B256::from_slice(&rs[32..]),
            y_parity,
        }
    }

    /// Parses the 65 byte `r || s || y_parity` form.
    pub fn from_bytes(bytes: &[u8; RECOVERABLE_SIGNATURE_LENGTH]) -> Self {
        Self {
            r: B256::from_slice(&bytes[..32]),
            s: B256::from_slice(&bytes[32..64]),
            y_parity: bytes[64],
        }
    }

    /// The `r` scalar.
    pub const fn r(&self) -> B256 {
        self.r
    }

    /// The `s` scalar.
    pub const fn s(&self) -> B256 {
        self.s
    }

    /// Recovery bit, 0 or 1 for a well formed signature.
    pub const fn y_parity(&self) -> u8 {
        self.y_parity
    }

    /// Legacy `v` value, `27 + y_parity`.
    pub const fn v(&self) -> u64 {
        LEGACY_V_OFFSET as u64 + self.y_parity as u64
    }

    /// Returns true if `s <= n/2`.
    pub fn is_low_s(&self) -> bool {
        U256::from_be_bytes(self.s.0) <= SECP256K1N_HALF
    }

    /// `r || s`.
    pub fn rs(&self) -> B512 {
        let mut rs = B512::ZERO;
        rs[..32].copy_from_slice(self.r.as_slice());
        rs[32..].copy_from_slice(self.s.as_slice());
        rs
    }

    /// `r || s || y_parity`, the recovery id is a raw 0/1 byte and not 27/28.
    pub fn as_bytes(&self) -> [u8; RECOVERABLE_SIGNATURE_LENGTH] {
        let mut bytes = [0u8; RECOVERABLE_SIGNATURE_LENGTH];
        bytes[..64].copy_from_slice(self.rs().as_slice());
        bytes[64] = self.y_parity;
        bytes
    }

    /// Recover the address that produced this signature over `hash`.
    ///
    /// Rejects `y_parity` other than 0/1 and high `s` before touching the curve.
    pub fn recover_address_from_prehash(&self, hash: &B256) -> Result<Address, RecoveryError> {
        if self.y_parity > 1 {
            return Err(RecoveryError::InvalidYParity(self.y_parity));
        }
        if !self.is_low_s() {
            return Err(RecoveryError::Eip2InvalidSValue);
        }
        let address = crypto::ecrecover(&self.rs(), self.y_parity, hash)?;
        Ok(address)
    }
}

#[cfg(feature = "serde")]
mod serde_repr {
    use super::AuthorizationSignature;
    use primitives::{B256, LEGACY_V_OFFSET};

    /// JSON form, `v` and `yParity` are both written; either is enough when reading.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct SignatureRepr {
        r: B256,
        s: B256,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        v: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y_parity: Option<u64>,
    }

    impl From<AuthorizationSignature> for SignatureRepr {
        fn from(sig: AuthorizationSignature) -> Self {
            Self {
                r: sig.r,
                s: sig.s,
                v: Some(sig.v()),
                y_parity: Some(sig.y_parity as u64),
            }
        }
    }

    impl TryFrom<SignatureRepr> for AuthorizationSignature {
        type Error = &'static str;

        fn try_from(repr: SignatureRepr) -> Result<Self, Self::Error> {
            let from_v = match repr.v {
                None => None,
                Some(v @ (0 | 1)) => Some(v),
                Some(v @ (27 | 28)) => Some(v - LEGACY_V_OFFSET as u64),
                Some(_) => return Err("invalid v, expected 0, 1, 27 or 28"),
            };
            let y_parity = match (repr.y_parity, from_v) {
                (Some(y_parity), Some(from_v)) if y_parity != from_v => {
                    return Err("yParity and v disagree")
                }
                (Some(y_parity), _) => y_parity,
                (None, Some(from_v)) => from_v,
                (None, None) => return Err("missing yParity or v"),
            };
            let y_parity = u8::try_from(y_parity).map_err(|_| "yParity out of range")?;
            Ok(Self::new(repr.r, repr.s, y_parity))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{address, b256};

    const HASH: B256 =
        b256!("0xd351d7cf09cd19e433a55bba7b3e17b721738ee0e831b875f336ba06593a3fad");
    const R: B256 = b256!("0xbb50e2d89a4ed70663d080659fe0ad4b9bc3e06c17a227433966cb59ceee020d");
    const S: B256 = b256!("0x4a8089ea57d36042c0a68300caedbdc4abaa9310ec2c490825b47fe85454a27d");
    const HIGH_S: B256 =
        b256!("0xb57f7615a82c9fbd3f597cff3512423a0f0449d5c31c57339a1ddea47be19ec4");

    #[test]
    fn v_and_bytes() {
        let sig = AuthorizationSignature::new(R, S, 1);
        assert_eq!(sig.v(), 28);
        let bytes = sig.as_bytes();
        assert_eq!(bytes[64], 1);
        assert_eq!(AuthorizationSignature::from_bytes(&bytes), sig);
        assert_eq!(AuthorizationSignature::from_rs_and_parity(&sig.rs(), 1), sig);
    }

    #[test]
    fn recover_fixture() {
        let sig = AuthorizationSignature::new(R, S, 0);
        assert!(sig.is_low_s());
        assert_eq!(
            sig.recover_address_from_prehash(&HASH),
            Ok(address!("0xa94f5374fce5edbc8e2a8697c15331677e6ebf0b"))
        );
    }

    #[test]
    fn high_s_is_rejected() {
        // same key would be recovered by plain ecrecover, EIP-2 forbids the form
        let sig = AuthorizationSignature::new(R, HIGH_S, 1);
        assert!(!sig.is_low_s());
        assert_eq!(
            sig.recover_address_from_prehash(&HASH),
            Err(RecoveryError::Eip2InvalidSValue)
        );
    }

    #[test]
    fn y_parity_out_of_range() {
        let sig = AuthorizationSignature::new(R, S, 27);
        assert_eq!(
            sig.recover_address_from_prehash(&HASH),
            Err(RecoveryError::InvalidYParity(27))
        );
    }

    #[test]
    fn zero_r_is_crypto_error() {
        let sig = AuthorizationSignature::new(B256::ZERO, S, 0);
        assert!(matches!(
            sig.recover_address_from_prehash(&HASH),
            Err(RecoveryError::Crypto(_))
        ));
    }

    #[cfg(feature = "serde")]
    mod json {
        use super::*;

        #[test]
        fn writes_v_and_y_parity() {
            let sig = AuthorizationSignature::new(R, S, 1);
            let value = serde_json::to_value(sig).unwrap();
            assert_eq!(value["v"], 28);
            assert_eq!(value["yParity"], 1);
            assert_eq!(
                value["r"],
                "0xbb50e2d89a4ed70663d080659fe0ad4b9bc3e06c17a227433966cb59ceee020d"
            );
        }

        #[test]
        fn reads_either_v_or_y_parity() {
            let r = "0xbb50e2d89a4ed70663d080659fe0ad4b9bc3e06c17a227433966cb59ceee020d";
            let s = "0x4a8089ea57d36042c0a68300caedbdc4abaa9310ec2c490825b47fe85454a27d";
            let expected = AuthorizationSignature::new(R, S, 1);

            for body in [
                format!(r#"{{"r":"{r}","s":"{s}","yParity":1}}"#),
                format!(r#"{{"r":"{r}","s":"{s}","v":28}}"#),
                format!(r#"{{"r":"{r}","s":"{s}","v":1}}"#),
                format!(r#"{{"r":"{r}","s":"{s}","v":28,"yParity":1}}"#),
            ] {
                let sig: AuthorizationSignature = serde_json::from_str(&body).unwrap();
                assert_eq!(sig, expected, "{body}");
            }

            for body in [
                format!(r#"{{"r":"{r}","s":"{s}"}}"#),
                format!(r#"{{"r":"{r}","s":"{s}","v":37}}"#),
                format!(r#"{{"r":"{r}","s":"{s}","v":27,"yParity":1}}"#),
            ] {
                assert!(serde_json::from_str::<AuthorizationSignature>(&body).is_err(), "{body}");
            }
        }
    }
}
