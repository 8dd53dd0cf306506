//! The fft backend: operations accelerated by a negacyclic Fast Fourier Transform.
//!
//! This backend provides the transform-heavy operations of the specification (the bootstrap,
//! and the conversion of bootstrap keys to the Fourier domain), built on `concrete-fft`. It
//! only supports polynomial sizes that are powers of two greater than or equal to 32.

mod implementation;
pub(crate) mod private;

pub use implementation::engines::*;
pub use implementation::entities::*;
