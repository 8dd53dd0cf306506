//! Drives the boundary the way a C caller would: raw pointers, explicit destroys, status
//! codes checked on every call.

use granite_core_ffi::*;
use std::ptr;

const SHIFT: usize = 50;
const VARIANCE: f64 = 0.000000001;
const LWE_DIMENSION: usize = 10;

unsafe fn new_engine() -> (*mut SeederBuilder, *mut granite_core::prelude::DefaultEngine) {
    let mut builder: *mut SeederBuilder = ptr::null_mut();
    assert_eq!(new_unix_seeder_builder(0, 0, &mut builder), 0);
    let mut engine: *mut granite_core::prelude::DefaultEngine = ptr::null_mut();
    assert_eq!(new_default_engine(builder, &mut engine), 0);
    (builder, engine)
}

#[test]
fn test_mul_cleartext_view_buffers() {
    unsafe {
        let (builder, engine) = new_engine();

        let mut sk: *mut granite_core::prelude::LweSecretKey64 = ptr::null_mut();
        assert_eq!(
            default_engine_create_lwe_secret_key_u64(engine, LWE_DIMENSION, &mut sk),
            0
        );

        let mut input_ct_buffer = vec![0_u64; LWE_DIMENSION + 1];
        let mut output_ct_buffer = vec![0_u64; LWE_DIMENSION + 1];

        let mut input_ct_as_view: *mut granite_core::prelude::LweCiphertextView64 =
            ptr::null_mut();
        assert_eq!(
            default_engine_create_lwe_ciphertext_view_u64(
                engine,
                input_ct_buffer.as_ptr(),
                LWE_DIMENSION + 1,
                &mut input_ct_as_view,
            ),
            0
        );

        let mut input_ct_as_mut_view: *mut granite_core::prelude::LweCiphertextMutView64 =
            ptr::null_mut();
        assert_eq!(
            default_engine_create_lwe_ciphertext_mut_view_u64(
                engine,
                input_ct_buffer.as_mut_ptr(),
                LWE_DIMENSION + 1,
                &mut input_ct_as_mut_view,
            ),
            0
        );

        let mut output_ct_as_view: *mut granite_core::prelude::LweCiphertextView64 =
            ptr::null_mut();
        assert_eq!(
            default_engine_create_lwe_ciphertext_view_u64(
                engine,
                output_ct_buffer.as_ptr(),
                LWE_DIMENSION + 1,
                &mut output_ct_as_view,
            ),
            0
        );

        let mut output_ct_as_mut_view: *mut granite_core::prelude::LweCiphertextMutView64 =
            ptr::null_mut();
        assert_eq!(
            default_engine_create_lwe_ciphertext_mut_view_u64(
                engine,
                output_ct_buffer.as_mut_ptr(),
                LWE_DIMENSION + 1,
                &mut output_ct_as_mut_view,
            ),
            0
        );

        let plaintext = 2_u64 << SHIFT;
        let integer_multiplier = 3_u64;

        assert_eq!(
            default_engine_discard_encrypt_lwe_ciphertext_u64_view_buffers(
                engine,
                sk,
                input_ct_as_mut_view,
                plaintext,
                VARIANCE,
            ),
            0
        );

        assert_eq!(
            default_engine_discard_mul_lwe_ciphertext_cleartext_u64_view_buffers(
                engine,
                output_ct_as_mut_view,
                input_ct_as_view,
                integer_multiplier,
            ),
            0
        );

        let mut output = 0_u64;
        assert_eq!(
            default_engine_decrypt_lwe_ciphertext_u64_view_buffers(
                engine,
                sk,
                output_ct_as_view,
                &mut output,
            ),
            0
        );

        let expected = (plaintext as f64) * (integer_multiplier as f64) / 2_f64.powi(SHIFT as i32);
        let obtained = (output as f64) / 2_f64.powi(SHIFT as i32);
        let rel_error = (obtained - expected).abs() / expected.max(obtained);
        assert!(rel_error < 0.001, "expected {expected}, obtained {obtained}");

        assert_eq!(destroy_lwe_secret_key_u64(sk), 0);
        assert_eq!(destroy_lwe_ciphertext_view_u64(input_ct_as_view), 0);
        assert_eq!(destroy_lwe_ciphertext_mut_view_u64(input_ct_as_mut_view), 0);
        assert_eq!(destroy_lwe_ciphertext_view_u64(output_ct_as_view), 0);
        assert_eq!(destroy_lwe_ciphertext_mut_view_u64(output_ct_as_mut_view), 0);
        assert_eq!(destroy_default_engine(engine), 0);
        assert_eq!(destroy_seeder_builder(builder), 0);
    }
}

#[test]
fn test_mul_cleartext_unchecked_raw_ptr_buffers() {
    unsafe {
        let mut builder: *mut SeederBuilder = ptr::null_mut();
        assert_eq!(new_unix_seeder_builder_unchecked(0, 0, &mut builder), 0);
        let mut engine: *mut granite_core::prelude::DefaultEngine = ptr::null_mut();
        assert_eq!(new_default_engine_unchecked(builder, &mut engine), 0);

        let mut sk: *mut granite_core::prelude::LweSecretKey64 = ptr::null_mut();
        assert_eq!(
            default_engine_create_lwe_secret_key_unchecked_u64(engine, LWE_DIMENSION, &mut sk),
            0
        );

        let mut input_ct_buffer = vec![0_u64; LWE_DIMENSION + 1];
        let mut output_ct_buffer = vec![0_u64; LWE_DIMENSION + 1];

        let plaintext = 2_u64 << SHIFT;
        let integer_multiplier = 3_u64;

        assert_eq!(
            default_engine_discard_encrypt_lwe_ciphertext_unchecked_u64_raw_ptr_buffers(
                engine,
                sk,
                input_ct_buffer.as_mut_ptr(),
                plaintext,
                VARIANCE,
            ),
            0
        );

        assert_eq!(
            default_engine_discard_mul_lwe_ciphertext_cleartext_unchecked_u64_raw_ptr_buffers(
                engine,
                output_ct_buffer.as_mut_ptr(),
                input_ct_buffer.as_ptr(),
                LWE_DIMENSION,
                integer_multiplier,
            ),
            0
        );

        let mut output = 0_u64;
        assert_eq!(
            default_engine_decrypt_lwe_ciphertext_unchecked_u64_raw_ptr_buffers(
                engine,
                sk,
                output_ct_buffer.as_ptr(),
                &mut output,
            ),
            0
        );

        let expected = (plaintext as f64) * (integer_multiplier as f64) / 2_f64.powi(SHIFT as i32);
        let obtained = (output as f64) / 2_f64.powi(SHIFT as i32);
        let rel_error = (obtained - expected).abs() / expected.max(obtained);
        assert!(rel_error < 0.001, "expected {expected}, obtained {obtained}");

        assert_eq!(destroy_lwe_secret_key_unchecked_u64(sk), 0);
        assert_eq!(destroy_default_engine_unchecked(engine), 0);
        assert_eq!(destroy_seeder_builder_unchecked(builder), 0);
    }
}

#[test]
fn test_view_and_raw_ptr_conventions_agree() {
    unsafe {
        let (builder, engine) = new_engine();

        let mut sk: *mut granite_core::prelude::LweSecretKey64 = ptr::null_mut();
        assert_eq!(
            default_engine_create_lwe_secret_key_u64(engine, LWE_DIMENSION, &mut sk),
            0
        );

        let mut input_ct_buffer = vec![0_u64; LWE_DIMENSION + 1];
        assert_eq!(
            default_engine_discard_encrypt_lwe_ciphertext_u64_raw_ptr_buffers(
                engine,
                sk,
                input_ct_buffer.as_mut_ptr(),
                2_u64 << SHIFT,
                VARIANCE,
            ),
            0
        );

        // Multiply through the raw pointer convention.
        let mut output_from_raw = vec![0_u64; LWE_DIMENSION + 1];
        assert_eq!(
            default_engine_discard_mul_lwe_ciphertext_cleartext_u64_raw_ptr_buffers(
                engine,
                output_from_raw.as_mut_ptr(),
                input_ct_buffer.as_ptr(),
                LWE_DIMENSION,
                3,
            ),
            0
        );

        // Multiply the same input through the view convention.
        let mut output_from_views = vec![0_u64; LWE_DIMENSION + 1];
        let mut input_view: *mut granite_core::prelude::LweCiphertextView64 = ptr::null_mut();
        assert_eq!(
            default_engine_create_lwe_ciphertext_view_u64(
                engine,
                input_ct_buffer.as_ptr(),
                LWE_DIMENSION + 1,
                &mut input_view,
            ),
            0
        );
        let mut output_mut_view: *mut granite_core::prelude::LweCiphertextMutView64 =
            ptr::null_mut();
        assert_eq!(
            default_engine_create_lwe_ciphertext_mut_view_u64(
                engine,
                output_from_views.as_mut_ptr(),
                LWE_DIMENSION + 1,
                &mut output_mut_view,
            ),
            0
        );
        assert_eq!(
            default_engine_discard_mul_lwe_ciphertext_cleartext_u64_view_buffers(
                engine,
                output_mut_view,
                input_view,
                3,
            ),
            0
        );

        // Both conventions must produce the same bytes.
        assert_eq!(output_from_raw, output_from_views);

        assert_eq!(destroy_lwe_ciphertext_view_u64(input_view), 0);
        assert_eq!(destroy_lwe_ciphertext_mut_view_u64(output_mut_view), 0);
        assert_eq!(destroy_lwe_secret_key_u64(sk), 0);
        assert_eq!(destroy_default_engine(engine), 0);
        assert_eq!(destroy_seeder_builder(builder), 0);
    }
}

#[test]
fn test_null_pointers_are_rejected() {
    unsafe {
        let (builder, engine) = new_engine();

        // A null out-pointer is rejected.
        assert_eq!(
            default_engine_create_lwe_secret_key_u64(engine, LWE_DIMENSION, ptr::null_mut()),
            1
        );
        // A null engine is rejected.
        let mut sk: *mut granite_core::prelude::LweSecretKey64 = ptr::null_mut();
        assert_eq!(
            default_engine_create_lwe_secret_key_u64(ptr::null_mut(), LWE_DIMENSION, &mut sk),
            1
        );
        assert!(sk.is_null());

        assert_eq!(destroy_default_engine(engine), 0);
        assert_eq!(destroy_seeder_builder(builder), 0);
    }
}
