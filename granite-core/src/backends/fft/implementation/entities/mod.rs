//! A module containing the entities of the fft backend.

mod fft_fourier_lwe_bootstrap_key;

pub use fft_fourier_lwe_bootstrap_key::*;
