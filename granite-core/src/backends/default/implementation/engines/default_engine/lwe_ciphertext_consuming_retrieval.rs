use crate::backends::default::implementation::engines::DefaultEngine;
use crate::backends::default::implementation::entities::{
    LweCiphertext32, LweCiphertext64, LweCiphertextMutView32, LweCiphertextMutView64,
    LweCiphertextView32, LweCiphertextView64,
};
use crate::specification::engines::{
    LweCiphertextConsumingRetrievalEngine, LweCiphertextConsumingRetrievalError,
};

/// # Description:
/// Implementation of [`LweCiphertextConsumingRetrievalEngine`] for [`DefaultEngine`] that
/// returns the underlying `Vec<u32>` of an [`LweCiphertext32`].
impl LweCiphertextConsumingRetrievalEngine<LweCiphertext32, Vec<u32>> for DefaultEngine {
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
    /// let ciphertext: LweCiphertext32 =
    ///     engine.create_lwe_ciphertext_from(raw_ciphertext.clone())?;
    /// let retrieved = engine.consume_retrieve_lwe_ciphertext(ciphertext)?;
    /// assert_eq!(raw_ciphertext, retrieved);
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn consume_retrieve_lwe_ciphertext(
        &mut self,
        ciphertext: LweCiphertext32,
    ) -> Result<Vec<u32>, LweCiphertextConsumingRetrievalError<Self::EngineError>> {
        Ok(unsafe { self.consume_retrieve_lwe_ciphertext_unchecked(ciphertext) })
    }

    unsafe fn consume_retrieve_lwe_ciphertext_unchecked(
        &mut self,
        ciphertext: LweCiphertext32,
    ) -> Vec<u32> {
        ciphertext.0.into_container()
    }
}

/// # Description:
/// Implementation of [`LweCiphertextConsumingRetrievalEngine`] for [`DefaultEngine`] that
/// returns the underlying `Vec<u64>` of an [`LweCiphertext64`].
impl LweCiphertextConsumingRetrievalEngine<LweCiphertext64, Vec<u64>> for DefaultEngine {
    fn consume_retrieve_lwe_ciphertext(
        &mut self,
        ciphertext: LweCiphertext64,
    ) -> Result<Vec<u64>, LweCiphertextConsumingRetrievalError<Self::EngineError>> {
        Ok(unsafe { self.consume_retrieve_lwe_ciphertext_unchecked(ciphertext) })
    }

    unsafe fn consume_retrieve_lwe_ciphertext_unchecked(
        &mut self,
        ciphertext: LweCiphertext64,
    ) -> Vec<u64> {
        ciphertext.0.into_container()
    }
}

/// # Description:
/// Implementation of [`LweCiphertextConsumingRetrievalEngine`] for [`DefaultEngine`] that
/// returns the underlying slice of an [`LweCiphertextView32`].
impl<'data> LweCiphertextConsumingRetrievalEngine<LweCiphertextView32<'data>, &'data [u32]>
    for DefaultEngine
{
    fn consume_retrieve_lwe_ciphertext(
        &mut self,
        ciphertext: LweCiphertextView32<'data>,
    ) -> Result<&'data [u32], LweCiphertextConsumingRetrievalError<Self::EngineError>> {
        Ok(unsafe { self.consume_retrieve_lwe_ciphertext_unchecked(ciphertext) })
    }

    unsafe fn consume_retrieve_lwe_ciphertext_unchecked(
        &mut self,
        ciphertext: LweCiphertextView32<'data>,
    ) -> &'data [u32] {
        ciphertext.0.into_container()
    }
}

/// # Description:
/// Implementation of [`LweCiphertextConsumingRetrievalEngine`] for [`DefaultEngine`] that
/// returns the underlying slice of an [`LweCiphertextMutView32`].
impl<'data> LweCiphertextConsumingRetrievalEngine<LweCiphertextMutView32<'data>, &'data mut [u32]>
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
    /// let retrieved = engine.consume_retrieve_lwe_ciphertext(ciphertext_view)?;
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn consume_retrieve_lwe_ciphertext(
        &mut self,
        ciphertext: LweCiphertextMutView32<'data>,
    ) -> Result<&'data mut [u32], LweCiphertextConsumingRetrievalError<Self::EngineError>> {
        Ok(unsafe { self.consume_retrieve_lwe_ciphertext_unchecked(ciphertext) })
    }

    unsafe fn consume_retrieve_lwe_ciphertext_unchecked(
        &mut self,
        ciphertext: LweCiphertextMutView32<'data>,
    ) -> &'data mut [u32] {
        ciphertext.0.into_container()
    }
}

/// # Description:
/// Implementation of [`LweCiphertextConsumingRetrievalEngine`] for [`DefaultEngine`] that
/// returns the underlying slice of an [`LweCiphertextView64`].
impl<'data> LweCiphertextConsumingRetrievalEngine<LweCiphertextView64<'data>, &'data [u64]>
    for DefaultEngine
{
    fn consume_retrieve_lwe_ciphertext(
        &mut self,
        ciphertext: LweCiphertextView64<'data>,
    ) -> Result<&'data [u64], LweCiphertextConsumingRetrievalError<Self::EngineError>> {
        Ok(unsafe { self.consume_retrieve_lwe_ciphertext_unchecked(ciphertext) })
    }

    unsafe fn consume_retrieve_lwe_ciphertext_unchecked(
        &mut self,
        ciphertext: LweCiphertextView64<'data>,
    ) -> &'data [u64] {
        ciphertext.0.into_container()
    }
}

/// # Description:
/// Implementation of [`LweCiphertextConsumingRetrievalEngine`] for [`DefaultEngine`] that
/// returns the underlying slice of an [`LweCiphertextMutView64`].
impl<'data> LweCiphertextConsumingRetrievalEngine<LweCiphertextMutView64<'data>, &'data mut [u64]>
    for DefaultEngine
{
    fn consume_retrieve_lwe_ciphertext(
        &mut self,
        ciphertext: LweCiphertextMutView64<'data>,
    ) -> Result<&'data mut [u64], LweCiphertextConsumingRetrievalError<Self::EngineError>> {
        Ok(unsafe { self.consume_retrieve_lwe_ciphertext_unchecked(ciphertext) })
    }

    unsafe fn consume_retrieve_lwe_ciphertext_unchecked(
        &mut self,
        ciphertext: LweCiphertextMutView64<'data>,
    ) -> &'data mut [u64] {
        ciphertext.0.into_container()
    }
}
