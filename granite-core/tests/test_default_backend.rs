//! End-to-end tests of the default backend, through the engine traits only.

#![cfg(feature = "backend_default")]

use granite_core::prelude::*;

// A seeder handing out a fixed root seed, to compare the outputs of two engines built from
// the same randomness.
struct FixedSeeder(u128);

impl Seeder for FixedSeeder {
    fn seed(&mut self) -> Seed {
        Seed(self.0)
    }

    fn is_available() -> bool {
        true
    }
}

fn new_engine() -> DefaultEngine {
    DefaultEngine::new(Box::new(FixedSeeder(1234567890))).unwrap()
}

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let mut engine = new_engine();
    let lwe_dimension = LweDimension(630);
    let noise = Variance(2_f64.powi(-50));

    // Here a hard-set encoding is applied (shift by 50 bits)
    let input = 5_u64 << 50;
    let key: LweSecretKey64 = engine.generate_new_lwe_secret_key(lwe_dimension).unwrap();
    let plaintext = engine.create_plaintext_from(&input).unwrap();
    let ciphertext = engine.encrypt_lwe_ciphertext(&key, &plaintext, noise).unwrap();
    let decrypted = engine.decrypt_lwe_ciphertext(&key, &ciphertext).unwrap();
    let output: u64 = engine.retrieve_plaintext(&decrypted).unwrap();

    let expected = input as f64 / 2_f64.powi(50);
    let obtained = output as f64 / 2_f64.powi(50);
    let rel_error = (obtained - expected).abs() / expected.max(obtained);
    assert!(rel_error < 0.001, "expected {expected}, obtained {obtained}");
}

#[test]
fn test_mul_cleartext_correctness() {
    let mut engine = new_engine();
    let lwe_dimension = LweDimension(630);
    let noise = Variance(0.000000001);

    // The reference scenario: the plaintext encodes 2, the multiplier is 3, the decryption
    // must be close to 6.
    let input = 2_u64 << 50;
    let multiplier = 3_u64;

    let key: LweSecretKey64 = engine.generate_new_lwe_secret_key(lwe_dimension).unwrap();
    let plaintext = engine.create_plaintext_from(&input).unwrap();
    let cleartext: Cleartext64 = engine.create_cleartext_from(&multiplier).unwrap();
    let ciphertext = engine.encrypt_lwe_ciphertext(&key, &plaintext, noise).unwrap();
    let mut product = engine.zero_encrypt_lwe_ciphertext(&key, noise).unwrap();
    engine
        .discard_mul_lwe_ciphertext_cleartext(&mut product, &ciphertext, &cleartext)
        .unwrap();
    let decrypted = engine.decrypt_lwe_ciphertext(&key, &product).unwrap();
    let output: u64 = engine.retrieve_plaintext(&decrypted).unwrap();

    let expected = 6_f64;
    let obtained = output as f64 / 2_f64.powi(50);
    let rel_error = (obtained - expected).abs() / expected.max(obtained);
    assert!(rel_error < 0.001, "expected {expected}, obtained {obtained}");
}

#[test]
fn test_fusing_and_discarding_multiplication_agree() {
    let mut engine = new_engine();
    let lwe_dimension = LweDimension(128);
    let noise = Variance(2_f64.powi(-50));

    let input = 7_u64 << 48;
    let multiplier = 5_u64;

    let key: LweSecretKey64 = engine.generate_new_lwe_secret_key(lwe_dimension).unwrap();
    let plaintext = engine.create_plaintext_from(&input).unwrap();
    let cleartext: Cleartext64 = engine.create_cleartext_from(&multiplier).unwrap();
    let ciphertext = engine.encrypt_lwe_ciphertext(&key, &plaintext, noise).unwrap();

    let mut discarding_output = engine.zero_encrypt_lwe_ciphertext(&key, noise).unwrap();
    engine
        .discard_mul_lwe_ciphertext_cleartext(&mut discarding_output, &ciphertext, &cleartext)
        .unwrap();

    let mut fusing_output = ciphertext.clone();
    engine
        .fuse_mul_lwe_ciphertext_cleartext(&mut fusing_output, &cleartext)
        .unwrap();

    // The two argument conventions compute the same product.
    assert_eq!(discarding_output, fusing_output);
}

#[test]
fn test_checked_unchecked_equivalence() {
    // Two engines built from the same root seed consume the same randomness stream: the
    // checked and unchecked entries must produce bit-identical results.
    let mut checked_engine = DefaultEngine::new(Box::new(FixedSeeder(42))).unwrap();
    let mut unchecked_engine = DefaultEngine::new(Box::new(FixedSeeder(42))).unwrap();

    let lwe_dimension = LweDimension(128);
    let noise = Variance(2_f64.powi(-50));
    let input = 3_u64 << 50;

    let checked_key: LweSecretKey64 = checked_engine
        .generate_new_lwe_secret_key(lwe_dimension)
        .unwrap();
    let checked_plaintext = checked_engine.create_plaintext_from(&input).unwrap();
    let checked_ciphertext = checked_engine
        .encrypt_lwe_ciphertext(&checked_key, &checked_plaintext, noise)
        .unwrap();

    let (unchecked_key, unchecked_ciphertext) = unsafe {
        let key: LweSecretKey64 =
            unchecked_engine.generate_new_lwe_secret_key_unchecked(lwe_dimension);
        let plaintext = unchecked_engine.create_plaintext_from_unchecked(&input);
        let ciphertext =
            unchecked_engine.encrypt_lwe_ciphertext_unchecked(&key, &plaintext, noise);
        (key, ciphertext)
    };

    assert_eq!(checked_key, unchecked_key);
    assert_eq!(checked_ciphertext, unchecked_ciphertext);
}

#[test]
fn test_dimension_mismatch_is_rejected_without_mutation() {
    let mut engine = new_engine();
    let noise = Variance(2_f64.powi(-50));

    let big_key: LweSecretKey64 = engine.generate_new_lwe_secret_key(LweDimension(20)).unwrap();
    let small_key: LweSecretKey64 = engine.generate_new_lwe_secret_key(LweDimension(10)).unwrap();

    let input = 1_u64 << 50;
    let plaintext = engine.create_plaintext_from(&input).unwrap();
    let cleartext: Cleartext64 = engine.create_cleartext_from(&2_u64).unwrap();
    let big_ciphertext = engine
        .encrypt_lwe_ciphertext(&big_key, &plaintext, noise)
        .unwrap();
    let mut small_ciphertext = engine.zero_encrypt_lwe_ciphertext(&small_key, noise).unwrap();
    let before = small_ciphertext.clone();

    let result = engine.discard_mul_lwe_ciphertext_cleartext(
        &mut small_ciphertext,
        &big_ciphertext,
        &cleartext,
    );
    assert!(matches!(
        result,
        Err(LweCiphertextCleartextDiscardingMultiplicationError::LweDimensionMismatch)
    ));
    // The output argument is left untouched on a rejected call.
    assert_eq!(small_ciphertext, before);

    // Encryption under a mismatched key is rejected too.
    let result =
        engine.discard_encrypt_lwe_ciphertext(&big_key, &mut small_ciphertext, &plaintext, noise);
    assert!(matches!(
        result,
        Err(LweCiphertextDiscardingEncryptionError::LweDimensionMismatch)
    ));
    assert_eq!(small_ciphertext, before);

    // Decryption under a mismatched key is rejected as well.
    let result = engine.decrypt_lwe_ciphertext(&small_key, &big_ciphertext);
    assert!(matches!(
        result,
        Err(LweCiphertextDecryptionError::LweDimensionMismatch)
    ));
}

#[test]
fn test_keyswitch_correctness() {
    let mut engine = new_engine();
    let input_lwe_dimension = LweDimension(600);
    let output_lwe_dimension = LweDimension(1024);
    let decomposition_level_count = DecompositionLevelCount(8);
    let decomposition_base_log = DecompositionBaseLog(4);
    let noise = Variance(2_f64.powi(-60));

    let input = 3_u64 << 60;
    let input_key: LweSecretKey64 = engine
        .generate_new_lwe_secret_key(input_lwe_dimension)
        .unwrap();
    let output_key: LweSecretKey64 = engine
        .generate_new_lwe_secret_key(output_lwe_dimension)
        .unwrap();
    let keyswitch_key = engine
        .generate_new_lwe_keyswitch_key(
            &input_key,
            &output_key,
            decomposition_level_count,
            decomposition_base_log,
            noise,
        )
        .unwrap();
    let plaintext = engine.create_plaintext_from(&input).unwrap();
    let ciphertext = engine
        .encrypt_lwe_ciphertext(&input_key, &plaintext, noise)
        .unwrap();
    let mut switched = engine
        .zero_encrypt_lwe_ciphertext(&output_key, noise)
        .unwrap();
    engine
        .discard_keyswitch_lwe_ciphertext(&mut switched, &ciphertext, &keyswitch_key)
        .unwrap();

    let decrypted = engine.decrypt_lwe_ciphertext(&output_key, &switched).unwrap();
    let output: u64 = engine.retrieve_plaintext(&decrypted).unwrap();

    // The message is encoded on the 4 most significant bits, the keyswitch noise stays well
    // below that window.
    let rounded = (output.wrapping_add(1 << 59)) >> 60;
    assert_eq!(rounded, 3);
}

#[test]
fn test_vector_encrypt_decrypt_roundtrip() {
    let mut engine = new_engine();
    let lwe_dimension = LweDimension(128);
    let noise = Variance(2_f64.powi(-50));

    let input = vec![1_u64 << 60, 2 << 60, 3 << 60, 4 << 60];
    let key: LweSecretKey64 = engine.generate_new_lwe_secret_key(lwe_dimension).unwrap();
    let plaintext_vector: PlaintextVector64 =
        engine.create_plaintext_vector_from(&input).unwrap();
    let ciphertext_vector = engine
        .encrypt_lwe_ciphertext_vector(&key, &plaintext_vector, noise)
        .unwrap();
    assert_eq!(ciphertext_vector.lwe_ciphertext_count(), LweCiphertextCount(4));

    let decrypted_vector = engine
        .decrypt_lwe_ciphertext_vector(&key, &ciphertext_vector)
        .unwrap();
    let output: Vec<u64> = engine.retrieve_plaintext_vector(&decrypted_vector).unwrap();

    for (expected, obtained) in input.iter().zip(output.iter()) {
        let rounded = (obtained.wrapping_add(1 << 59)) >> 60;
        assert_eq!(rounded, expected >> 60);
    }
}

#[cfg(feature = "backend_default_parallel")]
#[test]
fn test_parallel_bootstrap_key_generation_is_deterministic() {
    // Two parallel engines built from the same root seed produce bit-identical keys, whatever
    // the scheduling of the thread pool: the generators are forked per GGSW before being
    // dispatched. (The byte-level equivalence of the serial and parallel fill is covered by
    // the commons tests.)
    let mut key_source_engine = DefaultEngine::new(Box::new(FixedSeeder(7))).unwrap();
    let mut first_engine = DefaultParallelEngine::new(Box::new(FixedSeeder(99))).unwrap();
    let mut second_engine = DefaultParallelEngine::new(Box::new(FixedSeeder(99))).unwrap();

    let lwe_dimension = LweDimension(8);
    let glwe_dimension = GlweDimension(2);
    let polynomial_size = PolynomialSize(64);
    let level = DecompositionLevelCount(3);
    let base_log = DecompositionBaseLog(5);
    let noise = Variance(2_f64.powi(-50));

    let lwe_sk: LweSecretKey64 = key_source_engine
        .generate_new_lwe_secret_key(lwe_dimension)
        .unwrap();
    let glwe_sk: GlweSecretKey64 = key_source_engine
        .generate_new_glwe_secret_key(glwe_dimension, polynomial_size)
        .unwrap();

    let first_bsk: LweBootstrapKey64 = first_engine
        .generate_new_lwe_bootstrap_key(&lwe_sk, &glwe_sk, base_log, level, noise)
        .unwrap();
    let second_bsk: LweBootstrapKey64 = second_engine
        .generate_new_lwe_bootstrap_key(&lwe_sk, &glwe_sk, base_log, level, noise)
        .unwrap();

    assert_eq!(first_bsk.input_lwe_dimension(), lwe_dimension);
    assert_eq!(first_bsk.output_lwe_dimension(), LweDimension(128));
    assert_eq!(first_bsk, second_bsk);
}

#[test]
fn test_invalid_generation_parameters_are_rejected() {
    let mut engine = new_engine();
    let noise = Variance(2_f64.powi(-50));

    let result: Result<LweSecretKey64, _> = engine.generate_new_lwe_secret_key(LweDimension(0));
    assert!(matches!(
        result,
        Err(LweSecretKeyGenerationError::NullLweDimension)
    ));

    let input_key: LweSecretKey64 = engine.generate_new_lwe_secret_key(LweDimension(10)).unwrap();
    let output_key: LweSecretKey64 = engine.generate_new_lwe_secret_key(LweDimension(5)).unwrap();

    let result = engine.generate_new_lwe_keyswitch_key(
        &input_key,
        &output_key,
        DecompositionLevelCount(0),
        DecompositionBaseLog(4),
        noise,
    );
    assert!(matches!(
        result,
        Err(LweKeyswitchKeyGenerationError::NullDecompositionLevelCount)
    ));

    let result = engine.generate_new_lwe_keyswitch_key(
        &input_key,
        &output_key,
        DecompositionLevelCount(16),
        DecompositionBaseLog(4),
        noise,
    );
    assert!(matches!(
        result,
        Err(LweKeyswitchKeyGenerationError::DecompositionTooLarge)
    ));
}

#[cfg(feature = "backend_default_serialization")]
mod serialization {
    use super::*;

    #[test]
    fn test_serialization_roundtrip() {
        let mut engine = new_engine();
        let mut serialization_engine = DefaultSerializationEngine::new(()).unwrap();
        let lwe_dimension = LweDimension(128);
        let noise = Variance(2_f64.powi(-50));

        let key: LweSecretKey64 = engine.generate_new_lwe_secret_key(lwe_dimension).unwrap();
        let serialized = serialization_engine.serialize(&key).unwrap();
        let recovered: LweSecretKey64 =
            serialization_engine.deserialize(serialized.as_slice()).unwrap();
        assert_eq!(key, recovered);

        let input = 3_u64 << 50;
        let plaintext = engine.create_plaintext_from(&input).unwrap();
        let ciphertext = engine.encrypt_lwe_ciphertext(&key, &plaintext, noise).unwrap();
        let serialized = serialization_engine.serialize(&ciphertext).unwrap();
        let recovered: LweCiphertext64 =
            serialization_engine.deserialize(serialized.as_slice()).unwrap();
        assert_eq!(ciphertext, recovered);
    }

    #[test]
    fn test_corrupted_blob_is_rejected() {
        let mut engine = new_engine();
        let mut serialization_engine = DefaultSerializationEngine::new(()).unwrap();

        let key: LweSecretKey64 = engine.generate_new_lwe_secret_key(LweDimension(16)).unwrap();
        let mut serialized = serialization_engine.serialize(&key).unwrap();
        // Clobber the version tag.
        serialized[0] = 0xFF;
        let result: Result<LweSecretKey64, _> =
            serialization_engine.deserialize(serialized.as_slice());
        assert!(result.is_err());
    }
}
