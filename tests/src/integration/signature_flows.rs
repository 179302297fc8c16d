//! # Signature Flows
//!
//! Keys come from the key material crate, signatures from k256's reference
//! recoverable signer, and verification from the verification crate.

#[cfg(test)]
mod tests {
    use ep_01_key_material::{
        encode_public_key, keccak256, KeyMaterialApi, KeyMaterialService, KeyPair,
    };
    use ep_02_signature_verification::{
        RecoverableSignature, RecoveryFailure, SignatureError, SignatureVerificationApi,
        SignatureVerificationService, VerifierConfig,
    };
    use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
    use k256::elliptic_curve::sec1::ToEncodedPoint;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const MESSAGE: &[u8] = b"Transfer 1 ETH to 0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf";

    fn fresh_pair() -> KeyPair {
        KeyMaterialService::with_os_entropy()
            .generate_key_pair()
            .unwrap()
            .0
    }

    fn signing_key(pair: &KeyPair) -> SigningKey {
        SigningKey::from_slice(&pair.private_key().to_bytes()[..]).unwrap()
    }

    /// Reference signature over Keccak256(message) as r || s || v.
    fn sign(pair: &KeyPair, message: &[u8]) -> (Vec<u8>, Signature, RecoveryId) {
        let (signature, recid) = signing_key(pair)
            .sign_prehash_recoverable(&keccak256(message))
            .unwrap();
        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(recid.to_byte());
        (bytes, signature, recid)
    }

    fn verifier() -> SignatureVerificationService {
        SignatureVerificationService::default()
    }

    // =============================================================================
    // CORRECTNESS
    // =============================================================================

    #[test]
    fn test_reference_signature_verifies() {
        for _ in 0..25 {
            let pair = fresh_pair();
            let (signature, _, _) = sign(&pair, MESSAGE);

            assert_eq!(
                verifier().verify_signature(
                    MESSAGE,
                    &signature,
                    &encode_public_key(pair.public_key())
                ),
                Ok(true)
            );
        }
    }

    #[test]
    fn test_recovery_matches_reference_recovery() {
        let pair = fresh_pair();
        let (bytes, signature, recid) = sign(&pair, MESSAGE);
        let hash = keccak256(MESSAGE);

        let reference = VerifyingKey::recover_from_prehash(&hash, &signature, recid).unwrap();
        let parsed = RecoverableSignature::from_bytes(&bytes).unwrap();
        let recovered = verifier().recover_public_key(&hash, &parsed).unwrap();

        assert_eq!(
            &recovered.to_uncompressed()[..],
            reference.to_encoded_point(false).as_bytes()
        );
        assert_eq!(&recovered, pair.public_key());
    }

    #[test]
    fn test_legacy_v_accepted() {
        let pair = fresh_pair();
        let (mut signature, _, _) = sign(&pair, MESSAGE);
        signature[64] += 27;

        assert_eq!(
            verifier().verify_signature(
                MESSAGE,
                &signature,
                &encode_public_key(pair.public_key())
            ),
            Ok(true)
        );
    }

    #[test]
    fn test_recovered_address_is_generated_address() {
        let service = KeyMaterialService::with_os_entropy();
        let (pair, address) = service.generate_key_pair().unwrap();
        let (bytes, _, _) = sign(&pair, MESSAGE);
        let signature = RecoverableSignature::from_bytes(&bytes).unwrap();

        assert_eq!(verifier().recover_address(MESSAGE, &signature), Ok(address));
        assert_eq!(
            verifier().verify_signature_for_address(MESSAGE, &signature, &address),
            Ok(true)
        );
    }

    // =============================================================================
    // REJECTION
    // =============================================================================

    #[test]
    fn test_every_single_byte_mutation_is_rejected() {
        let pair = fresh_pair();
        let (signature, _, _) = sign(&pair, MESSAGE);
        let claimed = encode_public_key(pair.public_key());

        for i in 0..MESSAGE.len() {
            let mut mutated = MESSAGE.to_vec();
            mutated[i] = mutated[i].wrapping_add(1);

            // Either a different signer or no signer at all; never a match
            let result = verifier().verify_signature(&mutated, &signature, &claimed);
            assert!(
                matches!(
                    result,
                    Ok(false) | Err(SignatureError::RecoveryFailure(_))
                ),
                "byte {i}: {result:?}"
            );
        }
    }

    #[test]
    fn test_other_public_key_is_rejected() {
        let pair = fresh_pair();
        let other = fresh_pair();
        let (signature, _, _) = sign(&pair, MESSAGE);

        assert_eq!(
            verifier().verify_signature(
                MESSAGE,
                &signature,
                &encode_public_key(other.public_key())
            ),
            Ok(false)
        );
    }

    #[test]
    fn test_truncated_signature_is_an_error_not_false() {
        let pair = fresh_pair();
        let (signature, _, _) = sign(&pair, MESSAGE);

        assert_eq!(
            verifier().verify_signature(
                MESSAGE,
                &signature[..64],
                &encode_public_key(pair.public_key())
            ),
            Err(SignatureError::RecoveryFailure(
                RecoveryFailure::InvalidLength {
                    expected: 65,
                    actual: 64
                }
            ))
        );
    }

    #[test]
    fn test_malformed_public_key_is_an_error_not_false() {
        let pair = fresh_pair();
        let (signature, _, _) = sign(&pair, MESSAGE);

        let mut off_curve = encode_public_key(pair.public_key());
        let last = off_curve.pop().unwrap();
        off_curve.push(if last == '0' { '1' } else { '0' });

        assert!(matches!(
            verifier().verify_signature(MESSAGE, &signature, &off_curve),
            Err(SignatureError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_strict_policy_only_rejects_high_s() {
        let pair = fresh_pair();
        let (bytes, _, _) = sign(&pair, MESSAGE);
        let claimed = encode_public_key(pair.public_key());

        // k256 signs low-s; the strict verifier accepts it
        let strict = SignatureVerificationService::new(VerifierConfig::strict());
        assert_eq!(strict.verify_signature(MESSAGE, &bytes, &claimed), Ok(true));

        // (r, n - s, flipped parity) is the same signer's high-s twin
        let signature = Signature::from_slice(&bytes[..64]).unwrap();
        let high_s = Signature::from_scalars(signature.r(), -*signature.s()).unwrap();
        let mut twin = high_s.to_bytes().to_vec();
        twin.push(bytes[64] ^ 1);

        assert_eq!(verifier().verify_signature(MESSAGE, &twin, &claimed), Ok(true));
        assert_eq!(
            strict.verify_signature(MESSAGE, &twin, &claimed),
            Err(SignatureError::RecoveryFailure(RecoveryFailure::HighS))
        );
    }
}
