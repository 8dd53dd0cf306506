use crate::backends::default::implementation::engines::DefaultEngine;
use crate::backends::default::implementation::entities::{PlaintextVector32, PlaintextVector64};
use crate::specification::engines::{
    PlaintextVectorRetrievalEngine, PlaintextVectorRetrievalError,
};

/// # Description:
/// Implementation of [`PlaintextVectorRetrievalEngine`] for [`DefaultEngine`] that operates
/// on 32 bits integers.
impl PlaintextVectorRetrievalEngine<PlaintextVector32, u32> for DefaultEngine {
    fn retrieve_plaintext_vector(
        &mut self,
        plaintext: &PlaintextVector32,
    ) -> Result<Vec<u32>, PlaintextVectorRetrievalError<Self::EngineError>> {
        Ok(unsafe { self.retrieve_plaintext_vector_unchecked(plaintext) })
    }

    unsafe fn retrieve_plaintext_vector_unchecked(
        &mut self,
        plaintext: &PlaintextVector32,
    ) -> Vec<u32> {
        plaintext.0.as_ref().to_vec()
    }
}

/// # Description:
/// Implementation of [`PlaintextVectorRetrievalEngine`] for [`DefaultEngine`] that operates
/// on 64 bits integers.
impl PlaintextVectorRetrievalEngine<PlaintextVector64, u64> for DefaultEngine {
    fn retrieve_plaintext_vector(
        &mut self,
        plaintext: &PlaintextVector64,
    ) -> Result<Vec<u64>, PlaintextVectorRetrievalError<Self::EngineError>> {
        Ok(unsafe { self.retrieve_plaintext_vector_unchecked(plaintext) })
    }

    unsafe fn retrieve_plaintext_vector_unchecked(
        &mut self,
        plaintext: &PlaintextVector64,
    ) -> Vec<u64> {
        plaintext.0.as_ref().to_vec()
    }
}
