//! The boundary of the default backend.

use crate::seeder::SeederBuilder;
use crate::utils::{
    catch_panic, get_mut_checked, get_mut_slice_checked, get_ref_checked, get_slice_checked,
    ENGINE_CALL_ERR, ENGINE_CALL_OK,
};
use granite_core::prelude::{
    AbstractEngine, CleartextCreationEngine, DefaultEngine, DefaultParallelEngine,
    LweCiphertextCleartextDiscardingMultiplicationEngine, LweCiphertextCreationEngine,
    LweCiphertextDecryptionEngine, LweCiphertextDiscardingEncryptionEngine,
    LweCiphertextMutView64, LweCiphertextView64, LweDimension, LweSecretKey64,
    LweSecretKeyGenerationEngine, Plaintext64, PlaintextCreationEngine,
    PlaintextRetrievalEngine, Variance,
};
use std::os::raw::c_int;

/// Create a new [`DefaultEngine`].
#[no_mangle]
pub unsafe extern "C" fn new_default_engine(
    seeder_builder: *mut SeederBuilder,
    result: *mut *mut DefaultEngine,
) -> c_int {
    catch_panic(|| {
        let Ok(result) = get_mut_checked(result) else {
            return ENGINE_CALL_ERR;
        };
        // First fill the result with a null ptr so that if we fail and the return code is not
        // checked, then any access to the result pointer will segfault (mimics malloc on
        // failure)
        *result = std::ptr::null_mut();

        let Ok(seeder_builder) = get_ref_checked(seeder_builder) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(engine) = DefaultEngine::new(seeder_builder.create_seeder()) else {
            return ENGINE_CALL_ERR;
        };
        *result = Box::into_raw(Box::new(engine));
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of [`new_default_engine`].
#[no_mangle]
pub unsafe extern "C" fn new_default_engine_unchecked(
    seeder_builder: *mut SeederBuilder,
    result: *mut *mut DefaultEngine,
) -> c_int {
    catch_panic(|| {
        *result = std::ptr::null_mut();

        let seeder_builder = &*seeder_builder;
        let Ok(engine) = DefaultEngine::new(seeder_builder.create_seeder()) else {
            return ENGINE_CALL_ERR;
        };
        *result = Box::into_raw(Box::new(engine));
        ENGINE_CALL_OK
    })
}

/// Destroy a [`DefaultEngine`].
#[no_mangle]
pub unsafe extern "C" fn destroy_default_engine(engine: *mut DefaultEngine) -> c_int {
    catch_panic(|| {
        if engine.is_null() {
            return ENGINE_CALL_ERR;
        }
        drop(Box::from_raw(engine));
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of [`destroy_default_engine`].
#[no_mangle]
pub unsafe extern "C" fn destroy_default_engine_unchecked(engine: *mut DefaultEngine) -> c_int {
    catch_panic(|| {
        drop(Box::from_raw(engine));
        ENGINE_CALL_OK
    })
}

/// Create a new [`DefaultParallelEngine`].
#[no_mangle]
pub unsafe extern "C" fn new_default_parallel_engine(
    seeder_builder: *mut SeederBuilder,
    result: *mut *mut DefaultParallelEngine,
) -> c_int {
    catch_panic(|| {
        let Ok(result) = get_mut_checked(result) else {
            return ENGINE_CALL_ERR;
        };
        *result = std::ptr::null_mut();

        let Ok(seeder_builder) = get_ref_checked(seeder_builder) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(engine) = DefaultParallelEngine::new(seeder_builder.create_seeder()) else {
            return ENGINE_CALL_ERR;
        };
        *result = Box::into_raw(Box::new(engine));
        ENGINE_CALL_OK
    })
}

/// Destroy a [`DefaultParallelEngine`].
#[no_mangle]
pub unsafe extern "C" fn destroy_default_parallel_engine(
    engine: *mut DefaultParallelEngine,
) -> c_int {
    catch_panic(|| {
        if engine.is_null() {
            return ENGINE_CALL_ERR;
        }
        drop(Box::from_raw(engine));
        ENGINE_CALL_OK
    })
}

/// Generate a new [`LweSecretKey64`] of the given dimension.
#[no_mangle]
pub unsafe extern "C" fn default_engine_create_lwe_secret_key_u64(
    engine: *mut DefaultEngine,
    lwe_dimension: usize,
    result: *mut *mut LweSecretKey64,
) -> c_int {
    catch_panic(|| {
        let Ok(result) = get_mut_checked(result) else {
            return ENGINE_CALL_ERR;
        };
        *result = std::ptr::null_mut();

        let Ok(engine) = get_mut_checked(engine) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(secret_key) = engine.generate_new_lwe_secret_key(LweDimension(lwe_dimension))
        else {
            return ENGINE_CALL_ERR;
        };
        *result = Box::into_raw(Box::new(secret_key));
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of
/// [`default_engine_create_lwe_secret_key_u64`].
#[no_mangle]
pub unsafe extern "C" fn default_engine_create_lwe_secret_key_unchecked_u64(
    engine: *mut DefaultEngine,
    lwe_dimension: usize,
    result: *mut *mut LweSecretKey64,
) -> c_int {
    catch_panic(|| {
        *result = std::ptr::null_mut();

        let engine = &mut *engine;
        let secret_key: LweSecretKey64 =
            engine.generate_new_lwe_secret_key_unchecked(LweDimension(lwe_dimension));
        *result = Box::into_raw(Box::new(secret_key));
        ENGINE_CALL_OK
    })
}

/// Destroy an [`LweSecretKey64`].
#[no_mangle]
pub unsafe extern "C" fn destroy_lwe_secret_key_u64(secret_key: *mut LweSecretKey64) -> c_int {
    catch_panic(|| {
        if secret_key.is_null() {
            return ENGINE_CALL_ERR;
        }
        drop(Box::from_raw(secret_key));
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of [`destroy_lwe_secret_key_u64`].
#[no_mangle]
pub unsafe extern "C" fn destroy_lwe_secret_key_unchecked_u64(
    secret_key: *mut LweSecretKey64,
) -> c_int {
    catch_panic(|| {
        drop(Box::from_raw(secret_key));
        ENGINE_CALL_OK
    })
}

/// Wrap a caller-provided buffer in an immutable [`LweCiphertextView64`].
///
/// The view borrows the buffer for its whole lifetime: the buffer must outlive it, which is
/// entirely the caller's responsibility.
#[no_mangle]
pub unsafe extern "C" fn default_engine_create_lwe_ciphertext_view_u64(
    engine: *mut DefaultEngine,
    buffer: *const u64,
    size: usize,
    result: *mut *mut LweCiphertextView64<'static>,
) -> c_int {
    catch_panic(|| {
        let Ok(result) = get_mut_checked(result) else {
            return ENGINE_CALL_ERR;
        };
        *result = std::ptr::null_mut();

        let Ok(engine) = get_mut_checked(engine) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(buffer) = get_slice_checked(buffer, size) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(view): Result<LweCiphertextView64<'static>, _> =
            engine.create_lwe_ciphertext_from(buffer)
        else {
            return ENGINE_CALL_ERR;
        };
        *result = Box::into_raw(Box::new(view));
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of
/// [`default_engine_create_lwe_ciphertext_view_u64`].
#[no_mangle]
pub unsafe extern "C" fn default_engine_create_lwe_ciphertext_view_unchecked_u64(
    engine: *mut DefaultEngine,
    buffer: *const u64,
    size: usize,
    result: *mut *mut LweCiphertextView64<'static>,
) -> c_int {
    catch_panic(|| {
        *result = std::ptr::null_mut();

        let engine = &mut *engine;
        let buffer = std::slice::from_raw_parts(buffer, size);
        let view: LweCiphertextView64<'static> =
            engine.create_lwe_ciphertext_from_unchecked(buffer);
        *result = Box::into_raw(Box::new(view));
        ENGINE_CALL_OK
    })
}

/// Destroy an [`LweCiphertextView64`].
///
/// This releases the view, not the underlying buffer, which remains owned by the caller.
#[no_mangle]
pub unsafe extern "C" fn destroy_lwe_ciphertext_view_u64(
    view: *mut LweCiphertextView64<'static>,
) -> c_int {
    catch_panic(|| {
        if view.is_null() {
            return ENGINE_CALL_ERR;
        }
        drop(Box::from_raw(view));
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of [`destroy_lwe_ciphertext_view_u64`].
#[no_mangle]
pub unsafe extern "C" fn destroy_lwe_ciphertext_view_unchecked_u64(
    view: *mut LweCiphertextView64<'static>,
) -> c_int {
    catch_panic(|| {
        drop(Box::from_raw(view));
        ENGINE_CALL_OK
    })
}

/// Wrap a caller-provided buffer in a mutable [`LweCiphertextMutView64`].
///
/// The view borrows the buffer for its whole lifetime: the buffer must outlive it, and must
/// not be read or written through any other view while this one is in use.
#[no_mangle]
pub unsafe extern "C" fn default_engine_create_lwe_ciphertext_mut_view_u64(
    engine: *mut DefaultEngine,
    buffer: *mut u64,
    size: usize,
    result: *mut *mut LweCiphertextMutView64<'static>,
) -> c_int {
    catch_panic(|| {
        let Ok(result) = get_mut_checked(result) else {
            return ENGINE_CALL_ERR;
        };
        *result = std::ptr::null_mut();

        let Ok(engine) = get_mut_checked(engine) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(buffer) = get_mut_slice_checked(buffer, size) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(view): Result<LweCiphertextMutView64<'static>, _> =
            engine.create_lwe_ciphertext_from(buffer)
        else {
            return ENGINE_CALL_ERR;
        };
        *result = Box::into_raw(Box::new(view));
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of
/// [`default_engine_create_lwe_ciphertext_mut_view_u64`].
#[no_mangle]
pub unsafe extern "C" fn default_engine_create_lwe_ciphertext_mut_view_unchecked_u64(
    engine: *mut DefaultEngine,
    buffer: *mut u64,
    size: usize,
    result: *mut *mut LweCiphertextMutView64<'static>,
) -> c_int {
    catch_panic(|| {
        *result = std::ptr::null_mut();

        let engine = &mut *engine;
        let buffer = std::slice::from_raw_parts_mut(buffer, size);
        let view: LweCiphertextMutView64<'static> =
            engine.create_lwe_ciphertext_from_unchecked(buffer);
        *result = Box::into_raw(Box::new(view));
        ENGINE_CALL_OK
    })
}

/// Destroy an [`LweCiphertextMutView64`].
///
/// This releases the view, not the underlying buffer, which remains owned by the caller.
#[no_mangle]
pub unsafe extern "C" fn destroy_lwe_ciphertext_mut_view_u64(
    view: *mut LweCiphertextMutView64<'static>,
) -> c_int {
    catch_panic(|| {
        if view.is_null() {
            return ENGINE_CALL_ERR;
        }
        drop(Box::from_raw(view));
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of [`destroy_lwe_ciphertext_mut_view_u64`].
#[no_mangle]
pub unsafe extern "C" fn destroy_lwe_ciphertext_mut_view_unchecked_u64(
    view: *mut LweCiphertextMutView64<'static>,
) -> c_int {
    catch_panic(|| {
        drop(Box::from_raw(view));
        ENGINE_CALL_OK
    })
}

/// Encrypt (discarding) an `input` plaintext in the ciphertext behind the `output` mut view,
/// under the `secret_key`.
#[no_mangle]
pub unsafe extern "C" fn default_engine_discard_encrypt_lwe_ciphertext_u64_view_buffers(
    engine: *mut DefaultEngine,
    secret_key: *mut LweSecretKey64,
    output: *mut LweCiphertextMutView64<'static>,
    input: u64,
    noise_variance: f64,
) -> c_int {
    catch_panic(|| {
        let Ok(engine) = get_mut_checked(engine) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(secret_key) = get_ref_checked(secret_key) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(output) = get_mut_checked(output) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(plaintext) = engine.create_plaintext_from(&input) else {
            return ENGINE_CALL_ERR;
        };
        match engine.discard_encrypt_lwe_ciphertext(
            secret_key,
            output,
            &plaintext,
            Variance(noise_variance),
        ) {
            Ok(()) => ENGINE_CALL_OK,
            Err(_) => ENGINE_CALL_ERR,
        }
    })
}

/// [Unchecked](crate#unchecked-symbols) version of
/// [`default_engine_discard_encrypt_lwe_ciphertext_u64_view_buffers`].
#[no_mangle]
pub unsafe extern "C" fn default_engine_discard_encrypt_lwe_ciphertext_unchecked_u64_view_buffers(
    engine: *mut DefaultEngine,
    secret_key: *mut LweSecretKey64,
    output: *mut LweCiphertextMutView64<'static>,
    input: u64,
    noise_variance: f64,
) -> c_int {
    catch_panic(|| {
        let engine = &mut *engine;
        let secret_key = &*secret_key;
        let output = &mut *output;
        let plaintext: Plaintext64 = engine.create_plaintext_from_unchecked(&input);
        engine.discard_encrypt_lwe_ciphertext_unchecked(
            secret_key,
            output,
            &plaintext,
            Variance(noise_variance),
        );
        ENGINE_CALL_OK
    })
}

/// Raw pointer variant of
/// [`default_engine_discard_encrypt_lwe_ciphertext_u64_view_buffers`]: the output buffer must
/// hold `lwe_dimension + 1` values, where `lwe_dimension` is the dimension of the
/// `secret_key`.
#[no_mangle]
pub unsafe extern "C" fn default_engine_discard_encrypt_lwe_ciphertext_u64_raw_ptr_buffers(
    engine: *mut DefaultEngine,
    secret_key: *mut LweSecretKey64,
    output: *mut u64,
    input: u64,
    noise_variance: f64,
) -> c_int {
    catch_panic(|| {
        let Ok(engine) = get_mut_checked(engine) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(secret_key) = get_ref_checked(secret_key) else {
            return ENGINE_CALL_ERR;
        };
        let lwe_size = {
            use granite_core::prelude::LweSecretKeyEntity;
            secret_key.lwe_dimension().to_lwe_size().0
        };
        let Ok(output) = get_mut_slice_checked(output, lwe_size) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(mut output): Result<LweCiphertextMutView64<'static>, _> =
            engine.create_lwe_ciphertext_from(output)
        else {
            return ENGINE_CALL_ERR;
        };
        let Ok(plaintext) = engine.create_plaintext_from(&input) else {
            return ENGINE_CALL_ERR;
        };
        match engine.discard_encrypt_lwe_ciphertext(
            secret_key,
            &mut output,
            &plaintext,
            Variance(noise_variance),
        ) {
            Ok(()) => ENGINE_CALL_OK,
            Err(_) => ENGINE_CALL_ERR,
        }
    })
}

/// [Unchecked](crate#unchecked-symbols) version of
/// [`default_engine_discard_encrypt_lwe_ciphertext_u64_raw_ptr_buffers`].
#[no_mangle]
pub unsafe extern "C" fn default_engine_discard_encrypt_lwe_ciphertext_unchecked_u64_raw_ptr_buffers(
    engine: *mut DefaultEngine,
    secret_key: *mut LweSecretKey64,
    output: *mut u64,
    input: u64,
    noise_variance: f64,
) -> c_int {
    catch_panic(|| {
        let engine = &mut *engine;
        let secret_key = &*secret_key;
        let lwe_size = {
            use granite_core::prelude::LweSecretKeyEntity;
            secret_key.lwe_dimension().to_lwe_size().0
        };
        let output = std::slice::from_raw_parts_mut(output, lwe_size);
        let mut output: LweCiphertextMutView64<'static> =
            engine.create_lwe_ciphertext_from_unchecked(output);
        let plaintext: Plaintext64 = engine.create_plaintext_from_unchecked(&input);
        engine.discard_encrypt_lwe_ciphertext_unchecked(
            secret_key,
            &mut output,
            &plaintext,
            Variance(noise_variance),
        );
        ENGINE_CALL_OK
    })
}

/// Decrypt the ciphertext behind the `input` view under the `secret_key`, writing the
/// plaintext to `result`.
#[no_mangle]
pub unsafe extern "C" fn default_engine_decrypt_lwe_ciphertext_u64_view_buffers(
    engine: *mut DefaultEngine,
    secret_key: *mut LweSecretKey64,
    input: *mut LweCiphertextView64<'static>,
    result: *mut u64,
) -> c_int {
    catch_panic(|| {
        let Ok(engine) = get_mut_checked(engine) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(secret_key) = get_ref_checked(secret_key) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(input) = get_ref_checked(input) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(result) = get_mut_checked(result) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(plaintext) = engine.decrypt_lwe_ciphertext(secret_key, input) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(value) = engine.retrieve_plaintext(&plaintext) else {
            return ENGINE_CALL_ERR;
        };
        *result = value;
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of
/// [`default_engine_decrypt_lwe_ciphertext_u64_view_buffers`].
#[no_mangle]
pub unsafe extern "C" fn default_engine_decrypt_lwe_ciphertext_unchecked_u64_view_buffers(
    engine: *mut DefaultEngine,
    secret_key: *mut LweSecretKey64,
    input: *mut LweCiphertextView64<'static>,
    result: *mut u64,
) -> c_int {
    catch_panic(|| {
        let engine = &mut *engine;
        let secret_key = &*secret_key;
        let input = &*input;
        let plaintext: Plaintext64 = engine.decrypt_lwe_ciphertext_unchecked(secret_key, input);
        *result = engine.retrieve_plaintext_unchecked(&plaintext);
        ENGINE_CALL_OK
    })
}

/// Raw pointer variant of [`default_engine_decrypt_lwe_ciphertext_u64_view_buffers`]: the
/// input buffer must hold `lwe_dimension + 1` values, where `lwe_dimension` is the dimension
/// of the `secret_key`.
#[no_mangle]
pub unsafe extern "C" fn default_engine_decrypt_lwe_ciphertext_u64_raw_ptr_buffers(
    engine: *mut DefaultEngine,
    secret_key: *mut LweSecretKey64,
    input: *const u64,
    result: *mut u64,
) -> c_int {
    catch_panic(|| {
        let Ok(engine) = get_mut_checked(engine) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(secret_key) = get_ref_checked(secret_key) else {
            return ENGINE_CALL_ERR;
        };
        let lwe_size = {
            use granite_core::prelude::LweSecretKeyEntity;
            secret_key.lwe_dimension().to_lwe_size().0
        };
        let Ok(input) = get_slice_checked(input, lwe_size) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(result) = get_mut_checked(result) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(input): Result<LweCiphertextView64<'static>, _> =
            engine.create_lwe_ciphertext_from(input)
        else {
            return ENGINE_CALL_ERR;
        };
        let Ok(plaintext) = engine.decrypt_lwe_ciphertext(secret_key, &input) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(value) = engine.retrieve_plaintext(&plaintext) else {
            return ENGINE_CALL_ERR;
        };
        *result = value;
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of
/// [`default_engine_decrypt_lwe_ciphertext_u64_raw_ptr_buffers`].
#[no_mangle]
pub unsafe extern "C" fn default_engine_decrypt_lwe_ciphertext_unchecked_u64_raw_ptr_buffers(
    engine: *mut DefaultEngine,
    secret_key: *mut LweSecretKey64,
    input: *const u64,
    result: *mut u64,
) -> c_int {
    catch_panic(|| {
        let engine = &mut *engine;
        let secret_key = &*secret_key;
        let lwe_size = {
            use granite_core::prelude::LweSecretKeyEntity;
            secret_key.lwe_dimension().to_lwe_size().0
        };
        let input = std::slice::from_raw_parts(input, lwe_size);
        let input: LweCiphertextView64<'static> =
            engine.create_lwe_ciphertext_from_unchecked(input);
        let plaintext: Plaintext64 =
            engine.decrypt_lwe_ciphertext_unchecked(secret_key, &input);
        *result = engine.retrieve_plaintext_unchecked(&plaintext);
        ENGINE_CALL_OK
    })
}

/// Multiply (discarding) the ciphertext behind the `input` view by the `cleartext`, writing
/// the result to the ciphertext behind the `output` mut view.
#[no_mangle]
pub unsafe extern "C" fn default_engine_discard_mul_lwe_ciphertext_cleartext_u64_view_buffers(
    engine: *mut DefaultEngine,
    output: *mut LweCiphertextMutView64<'static>,
    input: *mut LweCiphertextView64<'static>,
    cleartext: u64,
) -> c_int {
    catch_panic(|| {
        let Ok(engine) = get_mut_checked(engine) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(output) = get_mut_checked(output) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(input) = get_ref_checked(input) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(cleartext) = engine.create_cleartext_from(&cleartext) else {
            return ENGINE_CALL_ERR;
        };
        match engine.discard_mul_lwe_ciphertext_cleartext(output, input, &cleartext) {
            Ok(()) => ENGINE_CALL_OK,
            Err(_) => ENGINE_CALL_ERR,
        }
    })
}

/// [Unchecked](crate#unchecked-symbols) version of
/// [`default_engine_discard_mul_lwe_ciphertext_cleartext_u64_view_buffers`].
#[no_mangle]
pub unsafe extern "C" fn default_engine_discard_mul_lwe_ciphertext_cleartext_unchecked_u64_view_buffers(
    engine: *mut DefaultEngine,
    output: *mut LweCiphertextMutView64<'static>,
    input: *mut LweCiphertextView64<'static>,
    cleartext: u64,
) -> c_int {
    catch_panic(|| {
        let engine = &mut *engine;
        let output = &mut *output;
        let input = &*input;
        let cleartext = engine.create_cleartext_from_unchecked(&cleartext);
        engine.discard_mul_lwe_ciphertext_cleartext_unchecked(output, input, &cleartext);
        ENGINE_CALL_OK
    })
}

/// Raw pointer variant of
/// [`default_engine_discard_mul_lwe_ciphertext_cleartext_u64_view_buffers`]: both buffers
/// must hold `lwe_dimension + 1` values, the dimension being passed explicitly.
#[no_mangle]
pub unsafe extern "C" fn default_engine_discard_mul_lwe_ciphertext_cleartext_u64_raw_ptr_buffers(
    engine: *mut DefaultEngine,
    output: *mut u64,
    input: *const u64,
    lwe_dimension: usize,
    cleartext: u64,
) -> c_int {
    catch_panic(|| {
        let Ok(engine) = get_mut_checked(engine) else {
            return ENGINE_CALL_ERR;
        };
        let lwe_size = LweDimension(lwe_dimension).to_lwe_size().0;
        let Ok(output) = get_mut_slice_checked(output, lwe_size) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(input) = get_slice_checked(input, lwe_size) else {
            return ENGINE_CALL_ERR;
        };
        let Ok(mut output): Result<LweCiphertextMutView64<'static>, _> =
            engine.create_lwe_ciphertext_from(output)
        else {
            return ENGINE_CALL_ERR;
        };
        let Ok(input): Result<LweCiphertextView64<'static>, _> =
            engine.create_lwe_ciphertext_from(input)
        else {
            return ENGINE_CALL_ERR;
        };
        let Ok(cleartext) = engine.create_cleartext_from(&cleartext) else {
            return ENGINE_CALL_ERR;
        };
        match engine.discard_mul_lwe_ciphertext_cleartext(&mut output, &input, &cleartext) {
            Ok(()) => ENGINE_CALL_OK,
            Err(_) => ENGINE_CALL_ERR,
        }
    })
}

/// [Unchecked](crate#unchecked-symbols) version of
/// [`default_engine_discard_mul_lwe_ciphertext_cleartext_u64_raw_ptr_buffers`].
#[no_mangle]
pub unsafe extern "C" fn default_engine_discard_mul_lwe_ciphertext_cleartext_unchecked_u64_raw_ptr_buffers(
    engine: *mut DefaultEngine,
    output: *mut u64,
    input: *const u64,
    lwe_dimension: usize,
    cleartext: u64,
) -> c_int {
    catch_panic(|| {
        let engine = &mut *engine;
        let lwe_size = LweDimension(lwe_dimension).to_lwe_size().0;
        let output = std::slice::from_raw_parts_mut(output, lwe_size);
        let input = std::slice::from_raw_parts(input, lwe_size);
        let mut output: LweCiphertextMutView64<'static> =
            engine.create_lwe_ciphertext_from_unchecked(output);
        let input: LweCiphertextView64<'static> =
            engine.create_lwe_ciphertext_from_unchecked(input);
        let cleartext = engine.create_cleartext_from_unchecked(&cleartext);
        engine.discard_mul_lwe_ciphertext_cleartext_unchecked(&mut output, &input, &cleartext);
        ENGINE_CALL_OK
    })
}
