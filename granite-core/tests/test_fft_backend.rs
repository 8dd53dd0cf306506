//! End-to-end tests of the fft backend, through the engine traits only.

#![cfg(all(feature = "backend_fft", feature = "backend_default"))]

use granite_core::prelude::*;

struct FixedSeeder(u128);

impl Seeder for FixedSeeder {
    fn seed(&mut self) -> Seed {
        Seed(self.0)
    }

    fn is_available() -> bool {
        true
    }
}

// Builds the lookup table of the identity over `Z/message_modulus`, with the negacyclic
// half-box rotation managing the discontinuity at zero.
fn identity_lut(polynomial_size: PolynomialSize, message_modulus: usize, delta: u64) -> Vec<u64> {
    let box_size = polynomial_size.0 / message_modulus;
    let mut lut = vec![0_u64; polynomial_size.0];
    for i in 0..message_modulus {
        for a in lut[i * box_size..(i + 1) * box_size].iter_mut() {
            *a = (i as u64).wrapping_mul(delta);
        }
    }
    let half_box_size = box_size / 2;
    for a in lut[0..half_box_size].iter_mut() {
        *a = a.wrapping_neg();
    }
    lut.rotate_left(half_box_size);
    lut
}

#[test]
fn test_bootstrap_identity_lut() {
    let mut engine = DefaultEngine::new(Box::new(FixedSeeder(314159))).unwrap();
    let mut fft_engine = FftEngine::new(()).unwrap();

    let lwe_dimension = LweDimension(20);
    let glwe_dimension = GlweDimension(1);
    let polynomial_size = PolynomialSize(512);
    let level = DecompositionLevelCount(3);
    let base_log = DecompositionBaseLog(7);
    let noise = Variance(2_f64.powi(-50));
    let message_modulus = 4_usize;
    let delta = 1_u64 << (64 - 1 - 2);

    let lwe_sk: LweSecretKey64 = engine.generate_new_lwe_secret_key(lwe_dimension).unwrap();
    let glwe_sk: GlweSecretKey64 = engine
        .generate_new_glwe_secret_key(glwe_dimension, polynomial_size)
        .unwrap();
    let std_bsk: LweBootstrapKey64 = engine
        .generate_new_lwe_bootstrap_key(&lwe_sk, &glwe_sk, base_log, level, noise)
        .unwrap();
    let fourier_bsk: FftFourierLweBootstrapKey64 =
        fft_engine.convert_lwe_bootstrap_key(&std_bsk).unwrap();

    // The bootstrap output is encrypted under the flattened glwe key.
    let output_lwe_sk: LweSecretKey64 = engine
        .transform_glwe_secret_key_to_lwe_secret_key(glwe_sk)
        .unwrap();
    assert_eq!(
        output_lwe_sk.lwe_dimension(),
        LweDimension(glwe_dimension.0 * polynomial_size.0)
    );

    let lut = identity_lut(polynomial_size, message_modulus, delta);
    let lut_as_plaintext_vector: PlaintextVector64 =
        engine.create_plaintext_vector_from(&lut).unwrap();
    let accumulator: GlweCiphertext64 = engine
        .trivially_encrypt_glwe_ciphertext(glwe_dimension.to_glwe_size(), &lut_as_plaintext_vector)
        .unwrap();

    for message in 0..message_modulus as u64 {
        let plaintext = engine
            .create_plaintext_from(&message.wrapping_mul(delta))
            .unwrap();
        let input_ct = engine
            .encrypt_lwe_ciphertext(&lwe_sk, &plaintext, noise)
            .unwrap();
        let mut output_ct = engine
            .zero_encrypt_lwe_ciphertext(&output_lwe_sk, noise)
            .unwrap();

        fft_engine
            .discard_bootstrap_lwe_ciphertext(&mut output_ct, &input_ct, &accumulator, &fourier_bsk)
            .unwrap();

        let decrypted = engine
            .decrypt_lwe_ciphertext(&output_lwe_sk, &output_ct)
            .unwrap();
        let output: u64 = engine.retrieve_plaintext(&decrypted).unwrap();

        let rounded = (output.wrapping_add(delta >> 1)) >> (64 - 3);
        assert_eq!(
            rounded % message_modulus as u64,
            message,
            "bootstrap of {message} decrypted to {output}"
        );
    }
}

#[test]
fn test_bootstrap_rejects_mismatched_accumulator() {
    let mut engine = DefaultEngine::new(Box::new(FixedSeeder(2718))).unwrap();
    let mut fft_engine = FftEngine::new(()).unwrap();

    let lwe_dimension = LweDimension(10);
    let glwe_dimension = GlweDimension(1);
    let polynomial_size = PolynomialSize(64);
    let noise = Variance(2_f64.powi(-50));

    let lwe_sk: LweSecretKey64 = engine.generate_new_lwe_secret_key(lwe_dimension).unwrap();
    let glwe_sk: GlweSecretKey64 = engine
        .generate_new_glwe_secret_key(glwe_dimension, polynomial_size)
        .unwrap();
    let std_bsk: LweBootstrapKey64 = engine
        .generate_new_lwe_bootstrap_key(
            &lwe_sk,
            &glwe_sk,
            DecompositionBaseLog(5),
            DecompositionLevelCount(3),
            noise,
        )
        .unwrap();
    let fourier_bsk: FftFourierLweBootstrapKey64 =
        fft_engine.convert_lwe_bootstrap_key(&std_bsk).unwrap();

    // The accumulator has the wrong polynomial size.
    let lut = vec![0_u64; 128];
    let lut_as_plaintext_vector: PlaintextVector64 =
        engine.create_plaintext_vector_from(&lut).unwrap();
    let accumulator: GlweCiphertext64 = engine
        .trivially_encrypt_glwe_ciphertext(glwe_dimension.to_glwe_size(), &lut_as_plaintext_vector)
        .unwrap();

    let output_lwe_sk: LweSecretKey64 = engine
        .transform_glwe_secret_key_to_lwe_secret_key(glwe_sk)
        .unwrap();
    let plaintext = engine.create_plaintext_from(&0_u64).unwrap();
    let input_ct = engine
        .encrypt_lwe_ciphertext(&lwe_sk, &plaintext, noise)
        .unwrap();
    let mut output_ct = engine
        .zero_encrypt_lwe_ciphertext(&output_lwe_sk, noise)
        .unwrap();
    let before = output_ct.clone();

    let result = fft_engine.discard_bootstrap_lwe_ciphertext(
        &mut output_ct,
        &input_ct,
        &accumulator,
        &fourier_bsk,
    );
    assert!(matches!(
        result,
        Err(LweCiphertextDiscardingBootstrapError::AccumulatorPolynomialSizeMismatch)
    ));
    // The output argument is left untouched on a rejected call.
    assert_eq!(output_ct, before);
}

#[test]
fn test_unsupported_polynomial_size_is_rejected() {
    let mut engine = DefaultEngine::new(Box::new(FixedSeeder(1))).unwrap();
    let mut fft_engine = FftEngine::new(()).unwrap();

    let lwe_sk: LweSecretKey64 = engine.generate_new_lwe_secret_key(LweDimension(4)).unwrap();
    let glwe_sk: GlweSecretKey64 = engine
        .generate_new_glwe_secret_key(GlweDimension(1), PolynomialSize(24))
        .unwrap();
    let std_bsk: LweBootstrapKey64 = engine
        .generate_new_lwe_bootstrap_key(
            &lwe_sk,
            &glwe_sk,
            DecompositionBaseLog(5),
            DecompositionLevelCount(3),
            Variance(2_f64.powi(-50)),
        )
        .unwrap();

    let result: Result<FftFourierLweBootstrapKey64, _> =
        fft_engine.convert_lwe_bootstrap_key(&std_bsk);
    assert!(matches!(
        result,
        Err(LweBootstrapKeyConversionError::Engine(
            FftError::UnsupportedPolynomialSize
        ))
    ));
}

#[cfg(feature = "backend_fft_serialization")]
mod serialization {
    use super::*;

    #[test]
    fn test_fourier_bootstrap_key_serialization_roundtrip() {
        let mut engine = DefaultEngine::new(Box::new(FixedSeeder(161803))).unwrap();
        let mut fft_engine = FftEngine::new(()).unwrap();
        let mut serialization_engine = FftSerializationEngine::new(()).unwrap();

        let lwe_sk: LweSecretKey64 = engine.generate_new_lwe_secret_key(LweDimension(4)).unwrap();
        let glwe_sk: GlweSecretKey64 = engine
            .generate_new_glwe_secret_key(GlweDimension(1), PolynomialSize(64))
            .unwrap();
        let std_bsk: LweBootstrapKey64 = engine
            .generate_new_lwe_bootstrap_key(
                &lwe_sk,
                &glwe_sk,
                DecompositionBaseLog(5),
                DecompositionLevelCount(3),
                Variance(2_f64.powi(-50)),
            )
            .unwrap();
        let fourier_bsk: FftFourierLweBootstrapKey64 =
            fft_engine.convert_lwe_bootstrap_key(&std_bsk).unwrap();

        let serialized = serialization_engine.serialize(&fourier_bsk).unwrap();
        let recovered: FftFourierLweBootstrapKey64 = serialization_engine
            .deserialize(serialized.as_slice())
            .unwrap();

        assert_eq!(fourier_bsk.input_lwe_dimension(), recovered.input_lwe_dimension());
        assert_eq!(fourier_bsk.polynomial_size(), recovered.polynomial_size());
        assert_eq!(fourier_bsk.glwe_dimension(), recovered.glwe_dimension());
    }
}
