use crate::commons::parameters::PolynomialSize;
use crate::specification::engines::sealed::AbstractEngineSeal;
use crate::specification::engines::AbstractEngine;
use core::mem::MaybeUninit;
use dyn_stack::DynStack;

/// The error which can occur in the execution of FHE operations by the [`FftEngine`].
#[derive(Debug)]
#[non_exhaustive]
pub enum FftError {
    UnsupportedPolynomialSize,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FftError::UnsupportedPolynomialSize => f.write_str(
                "The fft backend only supports polynomials of sizes that are powers of two \
                and greater than or equal to 32.",
            ),
        }
    }
}

impl std::error::Error for FftError {}

impl FftError {
    pub fn perform_fft_checks(polynomial_size: PolynomialSize) -> Result<(), FftError> {
        if polynomial_size.0.is_power_of_two() && polynomial_size.0 >= 32 {
            Ok(())
        } else {
            Err(FftError::UnsupportedPolynomialSize)
        }
    }
}

/// The main engine exposed by the fft backend.
///
/// The engine owns a growable scratch buffer, reused across the operations it executes. The
/// FFT plans themselves live in a process-global cache indexed by polynomial size, so that
/// the (expensive) plan measurement happens once per size and per process.
pub struct FftEngine {
    memory: Vec<MaybeUninit<u8>>,
}

impl FftEngine {
    pub(crate) fn resize(&mut self, capacity: usize) {
        self.memory.resize_with(capacity, MaybeUninit::uninit);
    }

    pub(crate) fn stack(&mut self) -> DynStack<'_> {
        DynStack::new(&mut self.memory)
    }
}

impl AbstractEngineSeal for FftEngine {}
impl AbstractEngine for FftEngine {
    type EngineError = FftError;
    type Parameters = ();

    fn new(_parameter: Self::Parameters) -> Result<Self, Self::EngineError> {
        Ok(FftEngine { memory: Vec::new() })
    }
}

mod lwe_bootstrap_key_conversion;
mod lwe_ciphertext_discarding_bootstrap;
