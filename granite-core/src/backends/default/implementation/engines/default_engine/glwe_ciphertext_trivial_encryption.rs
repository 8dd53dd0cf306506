use crate::backends::default::implementation::engines::DefaultEngine;
use crate::backends::default::implementation::entities::{
    GlweCiphertext32, GlweCiphertext64, PlaintextVector32, PlaintextVector64,
};
use crate::commons::crypto::glwe::GlweCiphertext as ImplGlweCiphertext;
use crate::commons::parameters::{GlweSize, PolynomialSize};
use crate::specification::engines::{
    GlweCiphertextTrivialEncryptionEngine, GlweCiphertextTrivialEncryptionError,
};
use crate::specification::entities::PlaintextVectorEntity;

/// # Description:
/// Implementation of [`GlweCiphertextTrivialEncryptionEngine`] for [`DefaultEngine`] that
/// operates on 32 bits integers.
impl GlweCiphertextTrivialEncryptionEngine<PlaintextVector32, GlweCiphertext32>
    for DefaultEngine
{
    /// # Example:
    /// ```
    /// use granite_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// // DISCLAIMER: the parameters used here are only for test purpose, and are not secure.
    /// let glwe_size = GlweSize(2);
    /// let polynomial_size = PolynomialSize(4);
    /// // Here a hard-set encoding is applied (shift by 20 bits)
    /// let input = vec![3_u32 << 20; polynomial_size.0];
    ///
    /// // Unix seeder must be given a secret input.
    /// // Here we just give it 0, which is totally unsafe.
    /// const UNSAFE_SECRET: u128 = 0;
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(UNSAFE_SECRET)))?;
    /// let plaintext_vector: PlaintextVector32 = engine.create_plaintext_vector_from(&input)?;
    ///
    /// let ciphertext: GlweCiphertext32 =
    ///     engine.trivially_encrypt_glwe_ciphertext(glwe_size, &plaintext_vector)?;
    /// #
    /// assert_eq!(ciphertext.glwe_dimension(), glwe_size.to_glwe_dimension());
    /// assert_eq!(ciphertext.polynomial_size(), polynomial_size);
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn trivially_encrypt_glwe_ciphertext(
        &mut self,
        glwe_size: GlweSize,
        input: &PlaintextVector32,
    ) -> Result<GlweCiphertext32, GlweCiphertextTrivialEncryptionError<Self::EngineError>> {
        Ok(unsafe { self.trivially_encrypt_glwe_ciphertext_unchecked(glwe_size, input) })
    }

    unsafe fn trivially_encrypt_glwe_ciphertext_unchecked(
        &mut self,
        glwe_size: GlweSize,
        input: &PlaintextVector32,
    ) -> GlweCiphertext32 {
        let polynomial_size = PolynomialSize(input.plaintext_count().0);
        let mut ciphertext = ImplGlweCiphertext::allocate(0u32, polynomial_size, glwe_size);
        ciphertext.fill_with_trivial_encryption(&input.0);
        GlweCiphertext32(ciphertext)
    }
}

/// # Description:
/// Implementation of [`GlweCiphertextTrivialEncryptionEngine`] for [`DefaultEngine`] that
/// operates on 64 bits integers.
impl GlweCiphertextTrivialEncryptionEngine<PlaintextVector64, GlweCiphertext64>
    for DefaultEngine
{
    fn trivially_encrypt_glwe_ciphertext(
        &mut self,
        glwe_size: GlweSize,
        input: &PlaintextVector64,
    ) -> Result<GlweCiphertext64, GlweCiphertextTrivialEncryptionError<Self::EngineError>> {
        Ok(unsafe { self.trivially_encrypt_glwe_ciphertext_unchecked(glwe_size, input) })
    }

    unsafe fn trivially_encrypt_glwe_ciphertext_unchecked(
        &mut self,
        glwe_size: GlweSize,
        input: &PlaintextVector64,
    ) -> GlweCiphertext64 {
        let polynomial_size = PolynomialSize(input.plaintext_count().0);
        let mut ciphertext = ImplGlweCiphertext::allocate(0u64, polynomial_size, glwe_size);
        ciphertext.fill_with_trivial_encryption(&input.0);
        GlweCiphertext64(ciphertext)
    }
}
