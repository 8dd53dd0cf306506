//! The default backend: a pure-CPU, standard-domain implementation of the specification.
//!
//! This backend provides the baseline implementation of most of the operations of the
//! specification, on entities with 32 or 64 bits of precision. It also contains the parallel
//! engine (behind the `backend_default_parallel` feature) accelerating the heavy generation
//! operations with a thread pool, and the serialization engine (behind the
//! `backend_default_serialization` feature).

mod implementation;

pub use implementation::engines::*;
pub use implementation::entities::*;
