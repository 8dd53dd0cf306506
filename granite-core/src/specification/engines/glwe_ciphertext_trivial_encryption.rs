use super::engine_error;
use crate::commons::parameters::GlweSize;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::{GlweCiphertextEntity, PlaintextVectorEntity};

engine_error! {
    GlweCiphertextTrivialEncryptionError for GlweCiphertextTrivialEncryptionEngine @
}

/// A trait for engines trivially encrypting GLWE ciphertexts.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a GLWE ciphertext containing
/// the trivial encryption of the `input` plaintext vector, with the requested `glwe_size`.
/// The polynomial size of the output is the number of plaintexts in `input`.
///
/// # Formal Definition
///
/// A trivial encryption uses a zero mask and no noise. It is absolutely not secure, as the
/// body contains a direct copy of the plaintext. It is however useful to inject the lookup
/// table of a bootstrap in the homomorphic domain.
pub trait GlweCiphertextTrivialEncryptionEngine<PlaintextVector, Ciphertext>: AbstractEngine
where
    PlaintextVector: PlaintextVectorEntity,
    Ciphertext: GlweCiphertextEntity,
{
    /// Trivially encrypts a GLWE ciphertext.
    fn trivially_encrypt_glwe_ciphertext(
        &mut self,
        glwe_size: GlweSize,
        input: &PlaintextVector,
    ) -> Result<Ciphertext, GlweCiphertextTrivialEncryptionError<Self::EngineError>>;

    /// Unsafely trivially encrypts a GLWE ciphertext.
    ///
    /// # Safety
    /// For the _general_ safety concerns regarding this operation, refer to the different
    /// variants of [`GlweCiphertextTrivialEncryptionError`]. For safety concerns _specific_
    /// to an engine, refer to the implementer safety section.
    unsafe fn trivially_encrypt_glwe_ciphertext_unchecked(
        &mut self,
        glwe_size: GlweSize,
        input: &PlaintextVector,
    ) -> Ciphertext;
}
