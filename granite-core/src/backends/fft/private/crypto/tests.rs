use super::bootstrap::{bootstrap_scratch, FourierLweBootstrapKey};
use super::ggsw::fill_with_forward_fourier_scratch;
use crate::backends::fft::private::math::fft::Fft;
use crate::commons::crypto::bootstrap::StandardBootstrapKey;
use crate::commons::crypto::encoding::{Plaintext, PlaintextList};
use crate::commons::crypto::glwe::GlweCiphertext;
use crate::commons::crypto::lwe::LweCiphertext;
use crate::commons::crypto::secret::{GlweSecretKey, LweSecretKey};
use crate::commons::dispersion::Variance;
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::numeric::{CastFrom, CastInto};
use crate::commons::parameters::{
    DecompositionBaseLog, DecompositionLevelCount, GlweDimension, LweDimension, PolynomialSize,
};
use crate::commons::test_tools::{new_encryption_random_generator, new_secret_random_generator};
use aligned_vec::avec;
use concrete_fft::c64;
use dyn_stack::{DynStack, GlobalMemBuffer};

// Builds the lookup table of `f` over `Z/message_modulus`, with the negacyclic half-box
// rotation managing the discontinuity at zero.
fn generate_accumulator<Scalar: UnsignedTorus>(
    polynomial_size: PolynomialSize,
    glwe_dimension: GlweDimension,
    message_modulus: usize,
    delta: Scalar,
    f: impl Fn(usize) -> usize,
) -> GlweCiphertext<Vec<Scalar>> {
    let box_size = polynomial_size.0 / message_modulus;
    let mut accumulator_scalar = vec![Scalar::ZERO; polynomial_size.0];
    for i in 0..message_modulus {
        let index = i * box_size;
        for a in accumulator_scalar[index..index + box_size].iter_mut() {
            *a = Scalar::cast_from(f(i) as u128).wrapping_mul(delta);
        }
    }
    let half_box_size = box_size / 2;
    for a in accumulator_scalar[0..half_box_size].iter_mut() {
        *a = a.wrapping_neg();
    }
    accumulator_scalar.rotate_left(half_box_size);

    let mut accumulator = GlweCiphertext::allocate(
        Scalar::ZERO,
        polynomial_size,
        glwe_dimension.to_glwe_size(),
    );
    accumulator.fill_with_trivial_encryption(&PlaintextList::from_container(accumulator_scalar));
    accumulator
}

fn test_bootstrap_identity_lut<Scalar: UnsignedTorus + CastFrom<u128>>() {
    let lwe_dimension = LweDimension(20);
    let glwe_dimension = GlweDimension(1);
    let polynomial_size = PolynomialSize(512);
    let level = DecompositionLevelCount(3);
    let base_log = DecompositionBaseLog(7);
    let noise = Variance(2_f64.powi(-50));
    let message_modulus = 4_usize;
    // The message is encoded on the bits below the padding bit.
    let delta = Scalar::ONE << (Scalar::BITS - 1 - 2);

    let mut secret_generator = new_secret_random_generator();
    let mut encryption_generator = new_encryption_random_generator();

    let lwe_sk: LweSecretKey<Vec<Scalar>> =
        LweSecretKey::generate_binary(lwe_dimension, &mut secret_generator);
    let glwe_sk: GlweSecretKey<Vec<Scalar>> =
        GlweSecretKey::generate_binary(glwe_dimension, polynomial_size, &mut secret_generator);
    let output_lwe_sk = glwe_sk.as_lwe_secret_key();

    // Standard-domain key generation, then conversion to the Fourier domain.
    let mut std_bsk = StandardBootstrapKey::allocate(
        Scalar::ZERO,
        glwe_dimension.to_glwe_size(),
        polynomial_size,
        level,
        base_log,
        lwe_dimension,
    );
    std_bsk.fill_with_new_key(&lwe_sk, &glwe_sk, noise, &mut encryption_generator);

    let mut fourier_bsk = FourierLweBootstrapKey::from_container(
        avec![
            c64::default();
            lwe_dimension.0
                * polynomial_size.0 / 2
                * level.0
                * glwe_dimension.to_glwe_size().0
                * glwe_dimension.to_glwe_size().0
        ]
        .into_boxed_slice(),
        lwe_dimension,
        glwe_dimension.to_glwe_size(),
        polynomial_size,
        base_log,
        level,
    );
    let fft = Fft::new(polynomial_size);
    let fft = fft.as_view();
    let mut mem = GlobalMemBuffer::new(fill_with_forward_fourier_scratch(fft).unwrap());
    fourier_bsk
        .as_mut_view()
        .fill_with_forward_fourier(&std_bsk, fft, DynStack::new(&mut mem));

    let mut mem = GlobalMemBuffer::new(
        bootstrap_scratch::<Scalar>(glwe_dimension.to_glwe_size(), polynomial_size, fft)
            .unwrap(),
    );

    for message in 0..message_modulus {
        let plaintext = Plaintext(Scalar::cast_from(message as u128).wrapping_mul(delta));
        let mut input =
            LweCiphertext::allocate(Scalar::ZERO, lwe_dimension.to_lwe_size());
        lwe_sk.encrypt_lwe(&mut input, &plaintext, noise, &mut encryption_generator);

        let accumulator = generate_accumulator(
            polynomial_size,
            glwe_dimension,
            message_modulus,
            delta,
            |x| x,
        );

        let mut output = LweCiphertext::allocate(
            Scalar::ZERO,
            LweDimension(glwe_dimension.0 * polynomial_size.0).to_lwe_size(),
        );
        fourier_bsk.as_view().bootstrap(
            &mut output,
            input.as_ref(),
            &accumulator,
            fft,
            DynStack::new(&mut mem),
        );

        let mut decrypted = Plaintext(Scalar::ZERO);
        output_lwe_sk.decrypt_lwe(&mut decrypted, &output);

        // Round to the closest multiple of delta.
        let rounded = decrypted
            .0
            .wrapping_add(delta >> 1)
            .wrapping_shr((Scalar::BITS - 3) as u32);
        let recovered: u128 = rounded.cast_into();
        assert_eq!(
            recovered as usize % message_modulus,
            message,
            "bootstrap of {message} decrypted to {recovered}"
        );
    }
}

#[test]
fn test_bootstrap_identity_lut_u32() {
    test_bootstrap_identity_lut::<u32>();
}

#[test]
fn test_bootstrap_identity_lut_u64() {
    test_bootstrap_identity_lut::<u64>();
}
