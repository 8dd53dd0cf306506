use crate::backends::default::implementation::engines::DefaultEngine;
use crate::backends::default::implementation::entities::{
    GlweSecretKey32, GlweSecretKey64, LweSecretKey32, LweSecretKey64,
};
use crate::commons::crypto::secret::LweSecretKey as ImplLweSecretKey;
use crate::specification::engines::{
    GlweToLweSecretKeyTransformationEngine, GlweToLweSecretKeyTransformationError,
};

/// # Description:
/// Implementation of [`GlweToLweSecretKeyTransformationEngine`] for [`DefaultEngine`] that
/// operates on 32 bits integers.
impl GlweToLweSecretKeyTransformationEngine<GlweSecretKey32, LweSecretKey32> for DefaultEngine {
    /// # Example:
    /// ```
    /// use granite_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// // DISCLAIMER: the parameters used here are only for test purpose, and are not secure.
    /// let glwe_dimension = GlweDimension(2);
    /// let polynomial_size = PolynomialSize(4);
    ///
    /// // Unix seeder must be given a secret input.
    /// // Here we just give it 0, which is totally unsafe.
    /// const UNSAFE_SECRET: u128 = 0;
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(UNSAFE_SECRET)))?;
    /// let glwe_secret_key: GlweSecretKey32 =
    ///     engine.generate_new_glwe_secret_key(glwe_dimension, polynomial_size)?;
    ///
    /// let lwe_secret_key: LweSecretKey32 =
    ///     engine.transform_glwe_secret_key_to_lwe_secret_key(glwe_secret_key)?;
    /// #
    /// assert_eq!(lwe_secret_key.lwe_dimension(), LweDimension(8));
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn transform_glwe_secret_key_to_lwe_secret_key(
        &mut self,
        glwe_secret_key: GlweSecretKey32,
    ) -> Result<LweSecretKey32, GlweToLweSecretKeyTransformationError<Self::EngineError>> {
        Ok(unsafe { self.transform_glwe_secret_key_to_lwe_secret_key_unchecked(glwe_secret_key) })
    }

    unsafe fn transform_glwe_secret_key_to_lwe_secret_key_unchecked(
        &mut self,
        glwe_secret_key: GlweSecretKey32,
    ) -> LweSecretKey32 {
        LweSecretKey32(ImplLweSecretKey::from_container(
            glwe_secret_key.0.into_container(),
        ))
    }
}

/// # Description:
/// Implementation of [`GlweToLweSecretKeyTransformationEngine`] for [`DefaultEngine`] that
/// operates on 64 bits integers.
impl GlweToLweSecretKeyTransformationEngine<GlweSecretKey64, LweSecretKey64> for DefaultEngine {
    fn transform_glwe_secret_key_to_lwe_secret_key(
        &mut self,
        glwe_secret_key: GlweSecretKey64,
    ) -> Result<LweSecretKey64, GlweToLweSecretKeyTransformationError<Self::EngineError>> {
        Ok(unsafe { self.transform_glwe_secret_key_to_lwe_secret_key_unchecked(glwe_secret_key) })
    }

    unsafe fn transform_glwe_secret_key_to_lwe_secret_key_unchecked(
        &mut self,
        glwe_secret_key: GlweSecretKey64,
    ) -> LweSecretKey64 {
        LweSecretKey64(ImplLweSecretKey::from_container(
            glwe_secret_key.0.into_container(),
        ))
    }
}
