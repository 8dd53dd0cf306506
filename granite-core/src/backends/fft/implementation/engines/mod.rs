//! A module containing the engines of the fft backend.

mod fft_engine;
pub use fft_engine::*;

#[cfg(feature = "backend_fft_serialization")]
mod fft_serialization_engine;
#[cfg(feature = "backend_fft_serialization")]
pub use fft_serialization_engine::*;
