use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::LweBootstrapKeyEntity;

engine_error! {
    LweBootstrapKeyConversionError for LweBootstrapKeyConversionEngine @
}

/// A trait for engines converting LWE bootstrap keys.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a LWE bootstrap key containing
/// the conversion of the `input` LWE bootstrap key to a type with a different representation
/// (for instance from the standard to the Fourier domain).
pub trait LweBootstrapKeyConversionEngine<Input, Output>: AbstractEngine
where
    Input: LweBootstrapKeyEntity,
    Output: LweBootstrapKeyEntity,
{
    /// Converts a LWE bootstrap key.
    fn convert_lwe_bootstrap_key(
        &mut self,
        input: &Input,
    ) -> Result<Output, LweBootstrapKeyConversionError<Self::EngineError>>;

    /// Unsafely converts a LWE bootstrap key.
    ///
    /// # Safety
    /// For the _general_ safety concerns regarding this operation, refer to the different
    /// variants of [`LweBootstrapKeyConversionError`]. For safety concerns _specific_ to an
    /// engine, refer to the implementer safety section.
    unsafe fn convert_lwe_bootstrap_key_unchecked(&mut self, input: &Input) -> Output;
}
