use crate::backends::default::implementation::engines::DefaultEngine;
use crate::backends::default::implementation::entities::{GlweCiphertext32, GlweCiphertext64};
use crate::commons::crypto::glwe::GlweCiphertext as ImplGlweCiphertext;
use crate::commons::parameters::PolynomialSize;
use crate::specification::engines::{
    GlweCiphertextCreationEngine, GlweCiphertextCreationError,
};

/// # Description:
/// Implementation of [`GlweCiphertextCreationEngine`] for [`DefaultEngine`] which returns a
/// [`GlweCiphertext32`] that owns its memory.
impl GlweCiphertextCreationEngine<Vec<u32>, GlweCiphertext32> for DefaultEngine {
    /// # Example:
    /// ```
    /// use granite_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// // DISCLAIMER: the parameters used here are only for test purpose, and are not secure.
    /// let polynomial_size = PolynomialSize(4);
    /// let glwe_size = GlweSize(3);
    ///
    /// // Unix seeder must be given a secret input.
    /// // Here we just give it 0, which is totally unsafe.
    /// const UNSAFE_SECRET: u128 = 0;
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(UNSAFE_SECRET)))?;
    /// let raw_ciphertext = vec![0_u32; glwe_size.0 * polynomial_size.0];
    /// let ciphertext: GlweCiphertext32 =
    ///     engine.create_glwe_ciphertext_from(raw_ciphertext, polynomial_size)?;
    /// #
    /// assert_eq!(ciphertext.glwe_dimension(), glwe_size.to_glwe_dimension());
    /// assert_eq!(ciphertext.polynomial_size(), polynomial_size);
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn create_glwe_ciphertext_from(
        &mut self,
        container: Vec<u32>,
        polynomial_size: PolynomialSize,
    ) -> Result<GlweCiphertext32, GlweCiphertextCreationError<Self::EngineError>> {
        GlweCiphertextCreationError::perform_generic_checks(container.len(), polynomial_size)?;
        Ok(unsafe { self.create_glwe_ciphertext_from_unchecked(container, polynomial_size) })
    }

    unsafe fn create_glwe_ciphertext_from_unchecked(
        &mut self,
        container: Vec<u32>,
        polynomial_size: PolynomialSize,
    ) -> GlweCiphertext32 {
        GlweCiphertext32(ImplGlweCiphertext::from_container(container, polynomial_size))
    }
}

/// # Description:
/// Implementation of [`GlweCiphertextCreationEngine`] for [`DefaultEngine`] which returns a
/// [`GlweCiphertext64`] that owns its memory.
impl GlweCiphertextCreationEngine<Vec<u64>, GlweCiphertext64> for DefaultEngine {
    fn create_glwe_ciphertext_from(
        &mut self,
        container: Vec<u64>,
        polynomial_size: PolynomialSize,
    ) -> Result<GlweCiphertext64, GlweCiphertextCreationError<Self::EngineError>> {
        GlweCiphertextCreationError::perform_generic_checks(container.len(), polynomial_size)?;
        Ok(unsafe { self.create_glwe_ciphertext_from_unchecked(container, polynomial_size) })
    }

    unsafe fn create_glwe_ciphertext_from_unchecked(
        &mut self,
        container: Vec<u64>,
        polynomial_size: PolynomialSize,
    ) -> GlweCiphertext64 {
        GlweCiphertext64(ImplGlweCiphertext::from_container(container, polynomial_size))
    }
}
