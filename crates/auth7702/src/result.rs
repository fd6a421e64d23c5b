use crate::VerificationError;
use primitives::Address;

/// Outcome of [`verify`](crate::verify).
///
/// `is_valid` holds only when the recovered signer is the expected one and the authorization
/// delegates to the expected contract.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VerificationResult {
    /// Signer and contract both match.
    pub is_valid: bool,
    /// Address recovered from the signature, `None` if recovery failed.
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "authorization::checksum::serialize_option")
    )]
    pub recovered_address: Option<Address>,
    /// Signer the caller expected.
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "authorization::checksum::serialize")
    )]
    pub expected_address: Address,
    /// The authorization names the expected contract.
    pub contract_address_matches: bool,
    /// Set when the signature is malformed.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error: Option<VerificationError>,
}

impl VerificationResult {
    /// Recovery succeeded; validity follows from the comparisons.
    pub fn recovered(
        recovered_address: Address,
        expected_address: Address,
        contract_address_matches: bool,
    ) -> Self {
        Self {
            is_valid: recovered_address == expected_address && contract_address_matches,
            recovered_address: Some(recovered_address),
            expected_address,
            contract_address_matches,
            error: None,
        }
    }

    /// Recovery failed, the result is never valid.
    pub fn malformed(
        error: VerificationError,
        expected_address: Address,
        contract_address_matches: bool,
    ) -> Self {
        Self {
            is_valid: false,
            recovered_address: None,
            expected_address,
            contract_address_matches,
            error: Some(error),
        }
    }

    /// Recovery succeeded but returned another address.
    pub fn is_signer_mismatch(&self) -> bool {
        self.recovered_address
            .is_some_and(|recovered| recovered != self.expected_address)
    }
}
