//! # Key Generation Flows
//!
//! Uniqueness and concurrency of `generate_key_pair`, plus fixed vectors
//! that pin the address derivation.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use ep_01_key_material::{
        decode_private_key, decode_public_key, encode_private_key, encode_public_key,
        generate_key_pair, Address, InsecureTestEntropy, KeyMaterialApi, KeyMaterialService,
        KeyPair, OsEntropy, PrivateKey,
    };
    use rayon::prelude::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn scalar(value: u8) -> PrivateKey {
        let mut bytes = [0u8; 32];
        bytes[31] = value;
        PrivateKey::from_bytes(&bytes).unwrap()
    }

    // =============================================================================
    // UNIQUENESS
    // =============================================================================

    #[test]
    fn test_ten_thousand_distinct_addresses() {
        let service = KeyMaterialService::with_os_entropy();

        let addresses: HashSet<Address> = (0..10_000)
            .map(|_| service.generate_key_pair().unwrap().1)
            .collect();

        assert_eq!(addresses.len(), 10_000);
    }

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    #[test]
    fn test_concurrent_generation_with_rayon() {
        let entropy = OsEntropy::new();

        let addresses: Vec<Address> = (0..1_000)
            .into_par_iter()
            .map(|_| generate_key_pair(&entropy).unwrap().1)
            .collect();

        let unique: HashSet<_> = addresses.iter().collect();
        assert_eq!(unique.len(), 1_000);
    }

    #[test]
    fn test_concurrent_draws_are_never_torn() {
        // Serial and concurrent runs over the same seeded stream must hand
        // out exactly the same 32-byte blocks, only in a different order.
        const THREADS: usize = 8;
        const PER_THREAD: usize = 125;

        let serial_source = InsecureTestEntropy::from_seed(99);
        let serial: HashSet<Address> = (0..THREADS * PER_THREAD)
            .map(|_| generate_key_pair(&serial_source).unwrap().1)
            .collect();

        let shared = Arc::new(InsecureTestEntropy::from_seed(99));
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let entropy = Arc::clone(&shared);
                thread::spawn(move || {
                    (0..PER_THREAD)
                        .map(|_| generate_key_pair(&entropy).unwrap().1)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let concurrent: Vec<Address> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(concurrent.len(), THREADS * PER_THREAD);
        let concurrent: HashSet<Address> = concurrent.into_iter().collect();
        assert_eq!(concurrent.len(), THREADS * PER_THREAD);
        assert_eq!(concurrent, serial);
    }

    // =============================================================================
    // KNOWN VECTORS
    // =============================================================================

    #[test]
    fn test_generator_scalar_address() {
        let pair = KeyPair::from_private_key(scalar(1));
        assert_eq!(
            pair.address().to_string(),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
    }

    #[test]
    fn test_small_scalar_addresses() {
        // Well-known addresses of the private keys 2 and 3
        assert_eq!(
            KeyPair::from_private_key(scalar(2)).address().to_lower_hex(),
            "0x2b5ad5c4795c026514f8317c7a215e218dccd6cf"
        );
        assert_eq!(
            KeyPair::from_private_key(scalar(3)).address().to_lower_hex(),
            "0x6813eb9362372eef6200f3b1dbc3f819671cba69"
        );
    }

    // =============================================================================
    // ENCODINGS
    // =============================================================================

    #[test]
    fn test_generated_keys_round_trip() {
        let service = KeyMaterialService::with_os_entropy();

        for _ in 0..100 {
            let (pair, address) = service.generate_key_pair().unwrap();

            let private = encode_private_key(pair.private_key());
            assert_eq!(private.len(), 66);
            assert_eq!(&decode_private_key(&private).unwrap(), pair.private_key());

            let public = encode_public_key(pair.public_key());
            assert_eq!(public.len(), 132);
            let decoded = decode_public_key(&public).unwrap();
            assert_eq!(&decoded, pair.public_key());
            assert_eq!(service.derive_address(&decoded), address);
        }
    }
}
