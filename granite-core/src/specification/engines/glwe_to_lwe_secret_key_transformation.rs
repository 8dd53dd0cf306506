use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::{GlweSecretKeyEntity, LweSecretKeyEntity};

engine_error! {
    GlweToLweSecretKeyTransformationError for GlweToLweSecretKeyTransformationEngine @
}

/// A trait for engines transforming GLWE secret keys into LWE secret keys.
///
/// # Semantics
///
/// This operation moves the existing GLWE secret key into a fresh LWE secret key, consuming
/// it in the process. The output key contains the same coefficients, flattened: it is the key
/// under which the sample extraction of a GLWE ciphertext (and hence the output of a
/// bootstrap) is encrypted.
pub trait GlweToLweSecretKeyTransformationEngine<InputKey, OutputKey>: AbstractEngine
where
    InputKey: GlweSecretKeyEntity,
    OutputKey: LweSecretKeyEntity,
{
    /// Transforms a GLWE secret key into an LWE secret key.
    fn transform_glwe_secret_key_to_lwe_secret_key(
        &mut self,
        glwe_secret_key: InputKey,
    ) -> Result<OutputKey, GlweToLweSecretKeyTransformationError<Self::EngineError>>;

    /// Unsafely transforms a GLWE secret key into an LWE secret key.
    ///
    /// # Safety
    /// For the _general_ safety concerns regarding this operation, refer to the different
    /// variants of [`GlweToLweSecretKeyTransformationError`]. For safety concerns _specific_
    /// to an engine, refer to the implementer safety section.
    unsafe fn transform_glwe_secret_key_to_lwe_secret_key_unchecked(
        &mut self,
        glwe_secret_key: InputKey,
    ) -> OutputKey;
}
