//! A module containing the engines of the default backend.

#[cfg(all(feature = "generator_x86_64_aesni", target_arch = "x86_64"))]
use concrete_csprng::generators::AesniRandomGenerator;
#[cfg(not(all(feature = "generator_x86_64_aesni", target_arch = "x86_64")))]
use concrete_csprng::generators::SoftwareRandomGenerator;

/// The byte-level random generator activated for this build.
///
/// The hardware-accelerated generator is selected when available, the software fallback
/// otherwise.
#[cfg(all(feature = "generator_x86_64_aesni", target_arch = "x86_64"))]
pub type ActivatedRandomGenerator = AesniRandomGenerator;
#[cfg(not(all(feature = "generator_x86_64_aesni", target_arch = "x86_64")))]
pub type ActivatedRandomGenerator = SoftwareRandomGenerator;

mod default_engine;
pub use default_engine::*;

#[cfg(feature = "backend_default_parallel")]
mod default_parallel_engine;
#[cfg(feature = "backend_default_parallel")]
pub use default_parallel_engine::*;

#[cfg(feature = "backend_default_serialization")]
mod default_serialization_engine;
#[cfg(feature = "backend_default_serialization")]
pub use default_serialization_engine::*;
