use crate::backends::default::implementation::engines::DefaultEngine;
use crate::backends::default::implementation::entities::{
    LweCiphertext32, LweCiphertext64, LweCiphertextMutView32, LweCiphertextMutView64,
    LweCiphertextView32, LweCiphertextView64,
};
use crate::commons::crypto::lwe::LweCiphertext as ImplLweCiphertext;
use crate::specification::engines::{LweCiphertextCreationEngine, LweCiphertextCreationError};

/// # Description:
/// Implementation of [`LweCiphertextCreationEngine`] for [`DefaultEngine`] which returns an
/// [`LweCiphertext32`] that owns its memory.
impl LweCiphertextCreationEngine<Vec<u32>, LweCiphertext32> for DefaultEngine {
    /// # Example:
    /// ```
    /// use granite_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// // DISCLAIMER: the parameters used here are only for test purpose, and are not secure.
    /// let lwe_size = LweSize(10);
    ///
    /// // Unix seeder must be given a secret input.
    /// // Here we just give it 0, which is totally unsafe.
    /// const UNSAFE_SECRET: u128 = 0;
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(UNSAFE_SECRET)))?;
    /// let raw_ciphertext = vec![0_u32; lwe_size.0];
    /// let ciphertext: LweCiphertext32 = engine.create_lwe_ciphertext_from(raw_ciphertext)?;
    /// #
    /// assert_eq!(ciphertext.lwe_dimension(), lwe_size.to_lwe_dimension());
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn create_lwe_ciphertext_from(
        &mut self,
        container: Vec<u32>,
    ) -> Result<LweCiphertext32, LweCiphertextCreationError<Self::EngineError>> {
        LweCiphertextCreationError::perform_generic_checks(container.len())?;
        Ok(unsafe { self.create_lwe_ciphertext_from_unchecked(container) })
    }

    unsafe fn create_lwe_ciphertext_from_unchecked(
        &mut self,
        container: Vec<u32>,
    ) -> LweCiphertext32 {
        LweCiphertext32(ImplLweCiphertext::from_container(container))
    }
}

/// # Description:
/// Implementation of [`LweCiphertextCreationEngine`] for [`DefaultEngine`] which returns an
/// [`LweCiphertext64`] that owns its memory.
impl LweCiphertextCreationEngine<Vec<u64>, LweCiphertext64> for DefaultEngine {
    /// # Example:
    /// ```
    /// use granite_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// // DISCLAIMER: the parameters used here are only for test purpose, and are not secure.
    /// let lwe_size = LweSize(10);
    ///
    /// // Unix seeder must be given a secret input.
    /// // Here we just give it 0, which is totally unsafe.
    /// const UNSAFE_SECRET: u128 = 0;
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(UNSAFE_SECRET)))?;
    /// let raw_ciphertext = vec![0_u64; lwe_size.0];
    /// let ciphertext: LweCiphertext64 = engine.create_lwe_ciphertext_from(raw_ciphertext)?;
    /// #
    /// assert_eq!(ciphertext.lwe_dimension(), lwe_size.to_lwe_dimension());
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn create_lwe_ciphertext_from(
        &mut self,
        container: Vec<u64>,
    ) -> Result<LweCiphertext64, LweCiphertextCreationError<Self::EngineError>> {
        LweCiphertextCreationError::perform_generic_checks(container.len())?;
        Ok(unsafe { self.create_lwe_ciphertext_from_unchecked(container) })
    }

    unsafe fn create_lwe_ciphertext_from_unchecked(
        &mut self,
        container: Vec<u64>,
    ) -> LweCiphertext64 {
        LweCiphertext64(ImplLweCiphertext::from_container(container))
    }
}

/// # Description:
/// Implementation of [`LweCiphertextCreationEngine`] for [`DefaultEngine`] which returns an
/// immutable [`LweCiphertextView32`] that does not own its memory.
impl<'data> LweCiphertextCreationEngine<&'data [u32], LweCiphertextView32<'data>>
    for DefaultEngine
{
    /// # Example:
    /// ```
    /// use granite_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// // DISCLAIMER: the parameters used here are only for test purpose, and are not secure.
    /// let lwe_size = LweSize(10);
    ///
    /// // Unix seeder must be given a secret input.
    /// // Here we just give it 0, which is totally unsafe.
    /// const UNSAFE_SECRET: u128 = 0;
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(UNSAFE_SECRET)))?;
    /// let raw_ciphertext = vec![0_u32; lwe_size.0];
    /// let ciphertext_view: LweCiphertextView32 =
    ///     engine.create_lwe_ciphertext_from(&raw_ciphertext[..])?;
    /// #
    /// assert_eq!(ciphertext_view.lwe_dimension(), lwe_size.to_lwe_dimension());
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn create_lwe_ciphertext_from(
        &mut self,
        container: &'data [u32],
    ) -> Result<LweCiphertextView32<'data>, LweCiphertextCreationError<Self::EngineError>> {
        LweCiphertextCreationError::perform_generic_checks(container.len())?;
        Ok(unsafe { self.create_lwe_ciphertext_from_unchecked(container) })
    }

    unsafe fn create_lwe_ciphertext_from_unchecked(
        &mut self,
        container: &'data [u32],
    ) -> LweCiphertextView32<'data> {
        LweCiphertextView32(ImplLweCiphertext::from_container(container))
    }
}

/// # Description:
/// Implementation of [`LweCiphertextCreationEngine`] for [`DefaultEngine`] which returns a
/// mutable [`LweCiphertextMutView32`] that does not own its memory.
impl<'data> LweCiphertextCreationEngine<&'data mut [u32], LweCiphertextMutView32<'data>>
    for DefaultEngine
{
    /// # Example:
    /// ```
    /// use granite_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// // DISCLAIMER: the parameters used here are only for test purpose, and are not secure.
    /// let lwe_size = LweSize(10);
    ///
    /// // Unix seeder must be given a secret input.
    /// // Here we just give it 0, which is totally unsafe.
    /// const UNSAFE_SECRET: u128 = 0;
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(UNSAFE_SECRET)))?;
    /// let mut raw_ciphertext = vec![0_u32; lwe_size.0];
    /// let ciphertext_view: LweCiphertextMutView32 =
    ///     engine.create_lwe_ciphertext_from(&mut raw_ciphertext[..])?;
    /// #
    /// assert_eq!(ciphertext_view.lwe_dimension(), lwe_size.to_lwe_dimension());
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn create_lwe_ciphertext_from(
        &mut self,
        container: &'data mut [u32],
    ) -> Result<LweCiphertextMutView32<'data>, LweCiphertextCreationError<Self::EngineError>> {
        LweCiphertextCreationError::perform_generic_checks(container.len())?;
        Ok(unsafe { self.create_lwe_ciphertext_from_unchecked(container) })
    }

    unsafe fn create_lwe_ciphertext_from_unchecked(
        &mut self,
        container: &'data mut [u32],
    ) -> LweCiphertextMutView32<'data> {
        LweCiphertextMutView32(ImplLweCiphertext::from_container(container))
    }
}

/// # Description:
/// Implementation of [`LweCiphertextCreationEngine`] for [`DefaultEngine`] which returns an
/// immutable [`LweCiphertextView64`] that does not own its memory.
impl<'data> LweCiphertextCreationEngine<&'data [u64], LweCiphertextView64<'data>>
    for DefaultEngine
{
    fn create_lwe_ciphertext_from(
        &mut self,
        container: &'data [u64],
    ) -> Result<LweCiphertextView64<'data>, LweCiphertextCreationError<Self::EngineError>> {
        LweCiphertextCreationError::perform_generic_checks(container.len())?;
        Ok(unsafe { self.create_lwe_ciphertext_from_unchecked(container) })
    }

    unsafe fn create_lwe_ciphertext_from_unchecked(
        &mut self,
        container: &'data [u64],
    ) -> LweCiphertextView64<'data> {
        LweCiphertextView64(ImplLweCiphertext::from_container(container))
    }
}

/// # Description:
/// Implementation of [`LweCiphertextCreationEngine`] for [`DefaultEngine`] which returns a
/// mutable [`LweCiphertextMutView64`] that does not own its memory.
impl<'data> LweCiphertextCreationEngine<&'data mut [u64], LweCiphertextMutView64<'data>>
    for DefaultEngine
{
    fn create_lwe_ciphertext_from(
        &mut self,
        container: &'data mut [u64],
    ) -> Result<LweCiphertextMutView64<'data>, LweCiphertextCreationError<Self::EngineError>> {
        LweCiphertextCreationError::perform_generic_checks(container.len())?;
        Ok(unsafe { self.create_lwe_ciphertext_from_unchecked(container) })
    }

    unsafe fn create_lwe_ciphertext_from_unchecked(
        &mut self,
        container: &'data mut [u64],
    ) -> LweCiphertextMutView64<'data> {
        LweCiphertextMutView64(ImplLweCiphertext::from_container(container))
    }
}
